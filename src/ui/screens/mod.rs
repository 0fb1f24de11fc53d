mod status;

pub(crate) use status::{render_empty, render_failed, render_loading};
