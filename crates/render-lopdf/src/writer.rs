use lopdf::content::Content;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes PDF objects straight to `W`, keeping only the objects that must
/// reference every page (resources, page tree, catalog) until `finish`.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    xref: Xref,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    info_id: ObjectId,
    page_ids: Vec<ObjectId>,
    font_dict: Dictionary,
    xobjects: Dictionary,
    info: Dictionary,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        Ok(Self {
            writer,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            max_id: 4,
            resources_id: (1, 0),
            pages_id: (2, 0),
            catalog_id: (3, 0),
            info_id: (4, 0),
            page_ids: Vec::new(),
            font_dict,
            xobjects: Dictionary::new(),
            info: dictionary! { "Producer" => Object::string_literal("packslip") },
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    /// Write `object` immediately and return its id.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.new_object_id();
        internal_writer::write_indirect_object(&mut self.writer, id, &object, &mut self.xref)?;
        Ok(id)
    }

    pub fn write_content_stream(&mut self, content: Content) -> io::Result<ObjectId> {
        let data = content
            .encode()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        self.write_object(Object::Stream(Stream::new(dictionary! {}, data)))
    }

    /// Make an image XObject available to every page under `name`.
    pub fn register_xobject(&mut self, name: &str, id: ObjectId) {
        self.xobjects.set(name.as_bytes(), Object::Reference(id));
    }

    pub fn set_title(&mut self, title: &str) {
        self.info.set("Title", text_string(title));
    }

    pub fn add_page_id(&mut self, page_id: ObjectId) {
        self.page_ids.push(page_id);
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish(mut self) -> io::Result<W> {
        let mut buffered_objects: BTreeMap<ObjectId, Object> = BTreeMap::new();
        let mut resources = dictionary! { "Font" => self.font_dict.clone() };
        if !self.xobjects.is_empty() {
            resources.set("XObject", self.xobjects.clone());
        }
        buffered_objects.insert(self.resources_id, resources.into());

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        buffered_objects.insert(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        buffered_objects.insert(self.catalog_id, catalog_dict.into());
        buffered_objects.insert(self.info_id, Object::Dictionary(self.info.clone()));

        for (id, object) in &buffered_objects {
            internal_writer::write_indirect_object(&mut self.writer, *id, object, &mut self.xref)?;
        }

        let xref_start = self.writer.stream_position()?;
        self.xref.size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, &self.xref)?;

        let trailer = dictionary! {
            "Size" => self.xref.size as i64,
            "Root" => self.catalog_id,
            "Info" => self.info_id,
        };
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// A PDF text string. ASCII stays a literal string; anything else is written
/// as UTF-16BE with a byte order mark, since readers decode bare literal
/// bytes as PDFDocEncoding.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

mod internal_writer {
    use super::*;

    pub fn write_indirect_object<W: Write + Seek>(
        writer: &mut W,
        id: ObjectId,
        object: &Object,
        xref: &mut Xref,
    ) -> io::Result<()> {
        let offset = writer.stream_position()?;
        xref.insert(
            id.0,
            XrefEntry::Normal {
                offset: offset as u32,
                generation: id.1,
            },
        );
        writeln!(writer, "{} {} obj", id.0, id.1)?;
        write_object(writer, object)?;
        writeln!(writer, "\nendobj")?;
        Ok(())
    }

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        if byte == b'(' || byte == b')' || byte == b'\\' {
                            writer.write_all(b"\\")?;
                        }
                        writer.write_all(&[byte])?;
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    writer.write_all(b"<")?;
                    for byte in s {
                        write!(writer, "{:02X}", byte)?;
                    }
                    writer.write_all(b">")
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted_keys {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Writes the table as consecutive-id subsections; object 0 is always
    /// the free-list head.
    pub fn write_xref<W: Write>(writer: &mut W, xref: &Xref) -> io::Result<()> {
        writeln!(writer, "xref")?;
        let mut ids: Vec<u32> = xref.entries.keys().copied().filter(|id| *id > 0).collect();
        ids.sort_unstable();

        writeln!(writer, "0 1")?;
        writeln!(writer, "0000000000 65535 f ")?;

        let mut section: Vec<(u32, &XrefEntry)> = Vec::new();
        for id in ids {
            if let Some((last, _)) = section.last()
                && *last + 1 != id
            {
                write_section(writer, &section)?;
                section.clear();
            }
            if let Some(entry) = xref.entries.get(&id) {
                section.push((id, entry));
            }
        }
        write_section(writer, &section)
    }

    fn write_section<W: Write>(writer: &mut W, section: &[(u32, &XrefEntry)]) -> io::Result<()> {
        let Some((start, _)) = section.first() else {
            return Ok(());
        };
        writeln!(writer, "{} {}", start, section.len())?;
        for (_, entry) in section {
            if let XrefEntry::Normal { offset, generation } = entry {
                writeln!(writer, "{:010} {:05} n ", offset, generation)?;
            } else {
                writeln!(writer, "0000000000 65535 f ")?;
            }
        }
        Ok(())
    }
}
