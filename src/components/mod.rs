pub mod network;
pub mod props;
pub mod svg_icon;
