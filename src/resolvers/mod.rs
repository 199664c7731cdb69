pub mod breadcrumbs;
pub mod url;
