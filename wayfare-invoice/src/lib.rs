pub mod document;
pub mod html;
pub mod pdf;
pub mod view;

pub use document::{InvoiceDocument, InvoiceRequest};
pub use html::render_html;
pub use pdf::render_pdf;
pub use view::{Invoice, InvoicePackage};
