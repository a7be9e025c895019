//! The parse → create orchestration behind `POST /api/parser/parse`.
//!
//! The two upstream calls are strictly sequential: the bill payload is
//! derived from the parse result, so the accounts service is only
//! called after a successful parse. Neither call is retried, and the
//! create call is not idempotent — repeating it creates another bill.

use chrono::Utc;
use shared::{
    AccountsClient, BillCreated, BillInput, BillItemInput, CreatedBill, ParsedReceipt,
    ParserClient, Result,
};
use tracing::info;

/// Caller-supplied options for one parse request.
#[derive(Debug, Default)]
pub struct ParseOptions {
    pub create_bill: bool,
    pub title: Option<String>,
}

/// Result of one orchestrated parse request.
#[derive(Debug)]
pub enum ParseOutcome {
    /// No bill was requested; the parser output, unchanged.
    Parsed(ParsedReceipt),
    /// A bill was created from the parsed receipt.
    Created(BillCreated),
}

pub async fn parse_and_maybe_create(
    parser: &ParserClient,
    accounts: &AccountsClient,
    image: Vec<u8>,
    filename: String,
    content_type: &str,
    options: ParseOptions,
) -> Result<ParseOutcome> {
    // Fail fast: a parse failure is surfaced as-is and nothing below runs.
    let parsed = parser.parse_receipt(image, filename, content_type).await?;

    if !options.create_bill {
        return Ok(ParseOutcome::Parsed(parsed));
    }

    let bill = build_bill_input(&parsed, options.title, today());
    // The parsed data is discarded if this fails; the parse call mutated
    // nothing, so there is no rollback to perform.
    let created: CreatedBill = accounts.create_bill(&bill).await?;
    info!("created bill {} from parsed receipt", created.id);

    Ok(ParseOutcome::Created(BillCreated {
        message: "Bill created successfully".to_string(),
        bill_id: created.id,
        parsed_data: parsed,
    }))
}

/// Today's UTC date in the `YYYY-MM-DD` form the accounts service expects.
fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Maps a parsed receipt to the accounts service's bill input.
///
/// The title falls back, in order, to the caller-supplied override,
/// `"Bill from {merchant}"`, then `"Bill for ${total}"`. The due date
/// falls back to today; a date supplied by the receipt is passed
/// through without validation.
pub fn build_bill_input(parsed: &ParsedReceipt, title: Option<String>, today: String) -> BillInput {
    let title = title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| match parsed.merchant.as_deref() {
            Some(merchant) if !merchant.is_empty() => format!("Bill from {}", merchant),
            _ => format!("Bill for ${}", parsed.total),
        });

    let due_date = parsed
        .date
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or(today);

    BillInput {
        title,
        total: parsed.total,
        due_date,
        paid: false,
        items: parsed
            .items
            .iter()
            .map(|item| BillItemInput {
                name: item.name.clone(),
                amount: item.price,
                quantity: item.quantity,
            })
            .collect(),
    }
}
