use packslip_types::Shipment;
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Shipment JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ShipmentExport {
    List(Vec<Shipment>),
    Wrapped { shipments: Vec<Shipment> },
}

/// Read shipments from a JSON export, preserving their order.
pub fn load_shipments<R: Read>(reader: R) -> Result<Vec<Shipment>, SourceError> {
    let export: ShipmentExport = serde_json::from_reader(reader)?;
    Ok(unwrap_export(export))
}

pub fn load_shipments_from_str(json: &str) -> Result<Vec<Shipment>, SourceError> {
    let export: ShipmentExport = serde_json::from_str(json)?;
    Ok(unwrap_export(export))
}

fn unwrap_export(export: ShipmentExport) -> Vec<Shipment> {
    let shipments = match export {
        ShipmentExport::List(list) => list,
        ShipmentExport::Wrapped { shipments } => shipments,
    };
    log::debug!("Loaded {} shipment(s)", shipments.len());
    shipments
}
