//! Business Central financials

use crate::entity::Entity;
use betasdk_core::{model, DateOnly, Timestamp};
use uuid::Uuid;

model! {
    /// A payment received from a customer, as a line of a payment journal.
    pub struct CustomerPayment: Entity {
        "amount" => amount / set_amount: f64,
        "appliesToInvoiceId" => applies_to_invoice_id / set_applies_to_invoice_id: Uuid,
        "appliesToInvoiceNumber" => applies_to_invoice_number / set_applies_to_invoice_number: String,
        "comment" => comment / set_comment: String,
        "contactId" => contact_id / set_contact_id: String,
        "customerId" => customer_id / set_customer_id: Uuid,
        "customerNumber" => customer_number / set_customer_number: String,
        "description" => description / set_description: String,
        "documentNumber" => document_number / set_document_number: String,
        "externalDocumentNumber" => external_document_number / set_external_document_number: String,
        "journalDisplayName" => journal_display_name / set_journal_display_name: String,
        "lastModifiedDateTime" => last_modified_date_time / set_last_modified_date_time: Timestamp,
        "lineNumber" => line_number / set_line_number: i32,
        "postingDate" => posting_date / set_posting_date: DateOnly,
    }
}
