pub mod badges;
pub mod header;
pub mod sidebar;
pub mod stats_bar;
