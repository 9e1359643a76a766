//! Lays out one packing-slip page per shipment.

use crate::emulation::EmulationGuard;
use crate::error::SlipError;
use crate::format::{
    format_order_date, full_name, parse_utc_offset, quantity_label, shipping_method_label,
    sku_prefix, street_line, strip_parenthesized, truncate_chars,
};
use crate::layout::*;
use crate::options::SlipOptions;
use crate::wrap::wrap_comment;
use log::debug;
use packslip_render_core::{DocumentCanvas, StandardFont};
use packslip_traits::{
    CustomerGroupRepository, ItemCriteria, OrderItemRepository, ResourceProvider, ScopeConfig,
    SortDirection, StoreEnvironment,
};
use packslip_types::{Color, Order, OrderItem, Shipment, StoreId};

/// The platform services a slip reads from while drawing.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub items: &'a dyn OrderItemRepository,
    pub groups: &'a dyn CustomerGroupRepository,
    pub scope: &'a dyn ScopeConfig,
    pub environment: &'a dyn StoreEnvironment,
    pub media: &'a dyn ResourceProvider,
}

pub struct ShipmentSlipRenderer<'a> {
    options: SlipOptions,
    deps: Collaborators<'a>,
}

impl<'a> ShipmentSlipRenderer<'a> {
    pub fn new(options: SlipOptions, deps: Collaborators<'a>) -> Self {
        Self { options, deps }
    }

    pub fn options(&self) -> &SlipOptions {
        &self.options
    }

    /// Draws every shipment in order, one page each. Returns the number of
    /// pages drawn. The first failure aborts the run.
    pub fn render<'s, C, I>(&self, shipments: I, canvas: &mut C) -> Result<usize, SlipError>
    where
        C: DocumentCanvas + ?Sized,
        I: IntoIterator<Item = &'s Shipment>,
    {
        let mut pages = 0;
        for shipment in shipments {
            self.render_shipment(shipment, canvas)?;
            pages += 1;
        }
        Ok(pages)
    }

    pub fn render_shipment<C: DocumentCanvas + ?Sized>(
        &self,
        shipment: &Shipment,
        canvas: &mut C,
    ) -> Result<(), SlipError> {
        debug!(
            "Rendering shipment {} (order {}, store {})",
            shipment.increment_id, shipment.order.increment_id, shipment.store_id
        );

        let _emulation = if shipment.store_id.is_store_view() {
            Some(EmulationGuard::start(self.deps.environment, shipment.store_id)?)
        } else {
            None
        };
        let store = self.deps.environment.current_store();

        canvas.begin_page(PAGE_SIZE)?;
        self.draw_logo(store, canvas)?;
        self.draw_order_header(&shipment.order, store, canvas)?;
        self.draw_table_header(canvas)?;
        let rows = self.draw_items(&shipment.order, canvas)?;
        let top = address_top(rows);
        self.draw_addresses(&shipment.order, top, canvas)?;
        self.draw_comment(&shipment.order, top, canvas)?;
        canvas.end_page()?;

        Ok(())
    }

    fn draw_logo<C: DocumentCanvas + ?Sized>(
        &self,
        store: StoreId,
        canvas: &mut C,
    ) -> Result<(), SlipError> {
        let file = self
            .deps
            .scope
            .value(LOGO_CONFIG_PATH, store)
            .filter(|v| !v.trim().is_empty());
        let Some(file) = file else {
            debug!("No logo configured for store {}", store);
            return Ok(());
        };

        let path = format!("{}/{}", LOGO_MEDIA_DIR, file.trim_start_matches('/'));
        let data = self.deps.media.load(&path)?;
        let image = canvas.embed_image(&path, &data)?;
        let (x1, y1, x2, y2) = LOGO_BOX;
        canvas.draw_image(image, x1, y1, x2, y2)?;
        Ok(())
    }

    fn draw_order_header<C: DocumentCanvas + ?Sized>(
        &self,
        order: &Order,
        store: StoreId,
        canvas: &mut C,
    ) -> Result<(), SlipError> {
        let labels = &self.options.labels;
        canvas.set_fill_color(Color::BLACK)?;

        canvas.set_font(StandardFont::HelveticaBold, TITLE_SIZE)?;
        canvas.draw_text(&labels.title, TITLE_POS.0, TITLE_POS.1)?;
        canvas.set_font(StandardFont::Helvetica, ORDER_NUMBER_SIZE)?;
        canvas.draw_text(
            &format!("{}{}", labels.order_prefix, order.increment_id),
            ORDER_NUMBER_POS.0,
            ORDER_NUMBER_POS.1,
        )?;

        let timezone = self.deps.scope.value(TIMEZONE_CONFIG_PATH, store);
        let offset = parse_utc_offset(TIMEZONE_CONFIG_PATH, timezone.as_deref())?;
        let date = format_order_date(order.created_at, offset, &self.options.date_format)?;
        let payment = strip_parenthesized(order.payment.method_title.as_deref().unwrap_or_default());

        let fields = [
            (
                SHIPPING_METHOD_X,
                &labels.shipping_method,
                shipping_method_label(&order.shipping_description),
            ),
            (PAYMENT_METHOD_X, &labels.payment_method, payment.as_str()),
            (ORDER_DATE_X, &labels.order_date, date.as_str()),
        ];
        for (x, label, value) in fields {
            canvas.set_font(StandardFont::HelveticaBold, META_SIZE)?;
            canvas.draw_text(label, x, META_LABEL_Y)?;
            canvas.set_font(StandardFont::Helvetica, META_SIZE)?;
            canvas.draw_text(value, x, META_VALUE_Y)?;
        }
        Ok(())
    }

    /// Gray band with white column captions. Leaves Helvetica 10 selected
    /// for the item rows.
    fn draw_table_header<C: DocumentCanvas + ?Sized>(&self, canvas: &mut C) -> Result<(), SlipError> {
        let labels = &self.options.labels;
        canvas.set_font(StandardFont::Helvetica, HEADER_SIZE)?;

        canvas.set_fill_color(Color::gray(HEADER_GRAY))?;
        canvas.set_line_width(0.0)?;
        canvas.draw_rectangle(TABLE_LEFT, HEADER_TOP, TABLE_RIGHT, HEADER_BOTTOM)?;

        canvas.set_fill_color(Color::WHITE)?;
        let columns = [
            (&labels.description, DESCRIPTION_X),
            (&labels.weight, WEIGHT_X),
            (&labels.article_code, ARTICLE_CODE_X),
            (&labels.sku, SKU_X),
            (&labels.quantity, QUANTITY_X),
        ];
        for (caption, x) in columns {
            canvas.draw_text(caption, x, HEADER_TEXT_Y)?;
        }
        Ok(())
    }

    /// Draws the order's item lines sorted by SKU and returns how many rows
    /// were drawn.
    fn draw_items<C: DocumentCanvas + ?Sized>(
        &self,
        order: &Order,
        canvas: &mut C,
    ) -> Result<usize, SlipError> {
        let criteria = ItemCriteria::for_order(order.entity_id).sort_by_sku(SortDirection::Ascending);
        let items = self.deps.items.list(&criteria)?;
        debug!("Order {} has {} item rows", order.increment_id, items.len());

        let mut y = FIRST_ROW_Y;
        for (index, item) in items.iter().enumerate() {
            canvas.set_fill_color(Color::gray(row_gray(index)))?;
            canvas.set_line_width(0.0)?;
            canvas.draw_rectangle(TABLE_LEFT, y + ROW_SHADE_TOP, TABLE_RIGHT, y - ROW_SHADE_BOTTOM)?;

            if item.product_type.is_composite() {
                self.draw_composite_row(item, y, canvas)?;
            } else {
                self.draw_simple_row(item, y, canvas)?;
            }
            y -= ROW_HEIGHT;
        }
        Ok(items.len())
    }

    fn draw_composite_row<C: DocumentCanvas + ?Sized>(
        &self,
        item: &OrderItem,
        y: f32,
        canvas: &mut C,
    ) -> Result<(), SlipError> {
        let text_y = y + ROW_TEXT_RISE;
        canvas.set_fill_color(Color::BLACK)?;
        canvas.draw_text(&item.name, indent(item), text_y)?;
        canvas.draw_text(sku_prefix(&item.sku), ARTICLE_CODE_X, text_y)?;
        Ok(())
    }

    fn draw_simple_row<C: DocumentCanvas + ?Sized>(
        &self,
        item: &OrderItem,
        y: f32,
        canvas: &mut C,
    ) -> Result<(), SlipError> {
        let text_y = y + ROW_TEXT_RISE;

        canvas.set_fill_color(Color::WHITE)?;
        canvas.set_line_width(0.0)?;
        canvas.draw_rectangle(CHECKBOX_LEFT, y + CHECKBOX_HEIGHT, CHECKBOX_RIGHT, y)?;

        canvas.set_fill_color(Color::BLACK)?;
        if let Some(weight) = item.attribute_text(&self.options.weight_attribute) {
            canvas.draw_text(weight, WEIGHT_X, text_y)?;
        }
        canvas.draw_text(truncate_chars(&item.name, NAME_MAX_CHARS), indent(item), text_y)?;
        canvas.draw_text(sku_prefix(&item.sku), ARTICLE_CODE_X, text_y)?;
        canvas.draw_text(&item.sku, SKU_X, text_y)?;
        canvas.draw_text(&quantity_label(item.qty_ordered), QUANTITY_X, text_y)?;
        Ok(())
    }

    /// Billing, contact and shipping blocks side by side below the table.
    fn draw_addresses<C: DocumentCanvas + ?Sized>(
        &self,
        order: &Order,
        top: f32,
        canvas: &mut C,
    ) -> Result<(), SlipError> {
        let labels = &self.options.labels;
        let billing = &order.billing_address;
        let shipping = &order.shipping_address;

        let group = match order.customer_group_id {
            Some(id) if id != 0 => self.deps.groups.code(id)?,
            _ => String::new(),
        };

        canvas.set_fill_color(Color::BLACK)?;

        let billing_lines = [
            group,
            full_name(billing),
            street_line(billing),
            billing.postcode.clone().unwrap_or_default(),
            billing.city.clone(),
            billing.country_id.clone(),
        ];
        draw_block(canvas, BILLING_X, top, &labels.billing_address, &billing_lines)?;

        let contact_lines = [
            order.customer_email.clone(),
            billing.telephone.clone().unwrap_or_default(),
        ];
        draw_block(canvas, CONTACT_X, top, &labels.contact, &contact_lines)?;

        let shipping_lines = [
            full_name(shipping),
            street_line(shipping),
            shipping.postcode.clone().unwrap_or_default(),
            shipping.city.clone(),
            shipping.country_id.clone(),
        ];
        draw_block(canvas, SHIPPING_X, top, &labels.shipping_address, &shipping_lines)?;
        Ok(())
    }

    /// The customer's delivery note, wrapped below the address blocks in
    /// the font the address lines left selected.
    fn draw_comment<C: DocumentCanvas + ?Sized>(
        &self,
        order: &Order,
        top: f32,
        canvas: &mut C,
    ) -> Result<(), SlipError> {
        let Some(comment) = order.bold_order_comment.as_deref().filter(|c| !c.is_empty()) else {
            return Ok(());
        };

        let flat: String = comment
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .collect();

        canvas.set_fill_color(Color::BLACK)?;
        let mut y = top - COMMENT_OFFSET;
        for line in wrap_comment(&flat, self.options.comment_wrap_width) {
            y -= LINE_HEIGHT;
            canvas.draw_text(&line, COMMENT_X, y)?;
        }
        Ok(())
    }
}

fn indent(item: &OrderItem) -> f32 {
    if item.has_parent() {
        CHILD_DESCRIPTION_X
    } else {
        DESCRIPTION_X
    }
}

/// A bold heading followed by regular lines, one `LINE_HEIGHT` apart.
fn draw_block<C: DocumentCanvas + ?Sized>(
    canvas: &mut C,
    x: f32,
    top: f32,
    heading: &str,
    lines: &[String],
) -> Result<(), SlipError> {
    let mut y = top - ADDRESS_FIRST_OFFSET;
    canvas.set_font(StandardFont::HelveticaBold, ADDRESS_SIZE)?;
    canvas.draw_text(heading, x, y)?;

    canvas.set_font(StandardFont::Helvetica, ADDRESS_SIZE)?;
    for line in lines {
        y -= LINE_HEIGHT;
        canvas.draw_text(line, x, y)?;
    }
    Ok(())
}
