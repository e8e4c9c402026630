//! Invoice aggregate
//!
//! Invoices, payments, and the portfolio account aggregation.

pub mod model;
pub mod repository;

pub use model::{summarize, AccountSummary, Invoice, InvoiceStatus, Payment, PaymentMethod};
pub use repository::{InvoiceRepository, NewInvoice, NewPayment, PaymentRepository};
