//! Dashboard shell

use salvo::prelude::*;

const INDEX_HTML: &str = include_str!("index.html");

/// Serves the static dashboard page.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Html(INDEX_HTML));
}
