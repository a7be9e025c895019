//! Wire models exchanged with the upstream services and the web client.
//!
//! Full `Bill` records are owned by the accounts service and relayed as
//! raw JSON by the CRUD proxy; only the payloads the BFF itself builds
//! or inspects are typed here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single line item extracted from a receipt image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

/// The receipt parser service's output.
///
/// Only the fields the orchestrator remaps are typed; anything else the
/// parser returns is preserved in `extra` so the result can be relayed
/// to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    #[serde(default)]
    pub items: Vec<ReceiptItem>,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for the accounts service's bill creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillInput {
    pub title: String,
    pub total: f64,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub due_date: String,
    pub paid: bool,
    pub items: Vec<BillItemInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItemInput {
    pub name: String,
    pub amount: f64,
    pub quantity: f64,
}

/// The accounts service's create response, reduced to the one field the
/// orchestrator reads.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBill {
    pub id: i64,
}

/// Response envelope returned when a parsed receipt was also persisted
/// as a bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillCreated {
    pub message: String,
    #[serde(rename = "billId")]
    pub bill_id: i64,
    #[serde(rename = "parsedData")]
    pub parsed_data: ParsedReceipt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub message: String,
}
