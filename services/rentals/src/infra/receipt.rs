use std::path::PathBuf;

use anyhow::Context as _;

use crate::domain::repository::ReceiptStore;
use crate::domain::types::RentTransaction;
use crate::error::RentalsServiceError;

/// Writes receipt artifacts as HTML files under
/// `{media_root}/receipts/html/{tnx_no}.html` and returns the path relative
/// to the media root.
#[derive(Clone)]
pub struct HtmlReceiptStore {
    pub media_root: PathBuf,
}

impl ReceiptStore for HtmlReceiptStore {
    async fn write(&self, tnx: &RentTransaction) -> Result<String, RentalsServiceError> {
        let relative = format!("receipts/html/{}.html", tnx.tnx_no);
        let full = self.media_root.join(&relative);
        if let Some(dir) = full.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .context("create receipt directory")?;
        }
        tokio::fs::write(&full, render_receipt(tnx))
            .await
            .context("write receipt file")?;
        Ok(relative)
    }
}

fn render_receipt(tnx: &RentTransaction) -> String {
    let kind = if tnx.is_rent { "Rent" } else { "Other" };
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Receipt {tnx_no}</title></head>
<body>
<h1>Payment Receipt</h1>
<table>
<tr><td>Transaction No</td><td>{tnx_no}</td></tr>
<tr><td>Date</td><td>{date}</td></tr>
<tr><td>Amount</td><td>{amount}</td></tr>
<tr><td>Type</td><td>{kind}</td></tr>
<tr><td>Payment Mode</td><td>{mode}</td></tr>
<tr><td>Comment</td><td>{comment}</td></tr>
</table>
</body>
</html>
"#,
        tnx_no = tnx.tnx_no,
        date = tnx.ts.format("%d-%m-%Y %H:%M:%S"),
        amount = tnx.amount,
        kind = kind,
        mode = tnx.payment_mode.as_str(),
        comment = tnx.comment.as_deref().unwrap_or("-"),
    )
}
