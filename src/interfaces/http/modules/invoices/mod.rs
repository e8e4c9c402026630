//! Invoice and payment endpoints

pub mod dto;
pub mod handlers;

pub use dto::{
    AccountSummaryDto, InvoiceDto, InvoiceFilter, IssueInvoiceRequest, PaymentDto,
    RegisterPaymentRequest,
};
pub use handlers::{
    get_invoice, invoice_stats, issue_invoice, list_invoices, pay_invoice, refresh_overdue,
    InvoiceHandlerState,
};
