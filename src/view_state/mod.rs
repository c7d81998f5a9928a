//! View state module for decoupling UI rendering from application state.
//!
//! UI rendering is a pure function of a [`ViewModel`]: the app builds one
//! per frame by borrowing its state, and the `ui` module never sees `App`.
//!
//! ```text
//! ┌─────────────────┐
//! │      App        │
//! │  (owns state)   │
//! └────────┬────────┘
//!          │ view_model()
//!          ▼
//! ┌─────────────────┐
//! │   ViewModel     │
//! │  (borrows data) │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │       UI        │
//! │ (pure rendering)│
//! └─────────────────┘
//! ```
//!
//! ## Components
//!
//! - [`ViewState`]: Panel visibility and trigger control state
//! - [`ResultView`] / [`HistoryBlock`]: Display values derived from a response
//! - [`ViewModel`]: Everything one frame needs

mod app_view;
mod panels;
mod result_view;

pub use app_view::{CopyButtonView, InputView, ViewModel};
pub use panels::{TriggerState, ViewState, BUSY_LABEL, GENERATE_LABEL, WARNING_MARKER};
pub use result_view::{render_result, HistoryBlock, ResultView};
