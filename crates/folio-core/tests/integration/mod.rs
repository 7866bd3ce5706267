mod catalog_views;
mod reveal_flow;
