//! # TUI Components
//!
//! Leaf components used by the screens. Navigation chrome lives in
//! [`crate::tui::navigation`]; these are the things a screen puts *inside*
//! a container.
//!
//! ## Props-Based Data Flow
//!
//! External data comes in as props, either plain struct fields or a
//! [`Binding`](crate::core::binding::Binding) when the component writes
//! back. Components never reach for the store on their own.
//!
//! ```rust,ignore
//! // Good: the bar only knows its binding
//! SearchBar::new(store.binding(|s| s.text.clone(), FirstModalAction::TextChanged), "FirstModalSearch");
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── button.rs       (one-line button, Enter or click)
//! ├── search_bar.rs   (labeled search field over a Binding<String>)
//! ├── stack.rs        (vertical stack of children)
//! └── text.rs         (one line, fixed or bound)
//! ```

pub mod button;
pub mod search_bar;
pub mod stack;
pub mod text;

pub use button::{Button, Pressed};
pub use search_bar::{SearchBar, SearchEvent, SEARCH_BAR_HEIGHT};
pub use stack::VStack;
pub use text::Text;
