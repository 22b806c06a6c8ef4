mod chart;
mod list;
mod view;

pub use view::History;
