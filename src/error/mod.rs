//! Error types for tweetgen.
//!
//! - **Error Categories**: High-level classification for logging and hints
//! - **Flow Errors**: Validation and request failures shown in the error panel
//! - **Clipboard Errors**: Logged only, never shown
//!
//! | Category | Description | Shown to user |
//! |----------|-------------|---------------|
//! | Network | No response from the service | Yes |
//! | Server | Non-2xx response | Yes |
//! | User | Empty topic | Yes |
//! | System | Clipboard/terminal | No |

mod category;
mod clipboard;
mod flow;

pub use category::ErrorCategory;
pub use clipboard::ClipboardError;
pub use flow::{
    FlowError, EMPTY_TOPIC_MESSAGE, NETWORK_FALLBACK_MESSAGE, REQUEST_FAILED_MESSAGE,
};
