pub mod cli;
pub mod color;
pub mod error;
pub mod naming;
pub mod scheme;
pub mod state;
pub mod storage;
pub mod tui;

pub use color::{HexColor, Hsl, Rgb};
pub use error::ColorError;
pub use naming::{get_color_name, Lang};
pub use scheme::{get_color_scheme, get_color_scheme_by_name, ColorInfo, SchemeKind};
pub use state::{HistoryEntry, SchemeState};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
