//! CLI command implementations.

pub(crate) mod adjacent;
pub(crate) mod check;
pub(crate) mod context;
pub(crate) mod nav;
pub(crate) mod search;
pub(crate) mod sidebar;

pub(crate) use adjacent::AdjacentArgs;
pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use search::SearchArgs;
pub(crate) use sidebar::SidebarArgs;
