//! Render-time helpers for compiled Vue templates.
//!
//! Generated render functions call these through short aliases:
//!
//! | Alias | Function |
//! |---|---|
//! | `_l` | [`render_list`] |
//! | `_g` | [`bind_object_listeners`] |
//! | `_b` | [`bind_object_props`] |
//!
//! None of them fail. Unusable input is reported through a
//! [`WarnHandler`](vue_diagnostics::WarnHandler) and otherwise ignored.

pub mod listeners;
pub mod props;
pub mod render_list;
pub mod value;
pub mod vnode_data;

pub use listeners::bind_object_listeners;
pub use props::bind_object_props;
pub use render_list::{render_list, ListKey, RenderedList};
pub use value::{Function, Object, Value};
pub use vnode_data::{Listener, ListenerMap, VNodeData};
