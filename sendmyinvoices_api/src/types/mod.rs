mod code;
pub use self::code::CodeRequest;

mod document;
pub use self::document::{AttachmentUpload, DocumentUpload};
