//! Extension traits

mod depot;
mod on_date;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use on_date::OnDateExt as _;
pub(crate) use result::ResultExt as _;
