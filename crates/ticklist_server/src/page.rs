//! The HTML page and its embedded item snapshot.

use ticklist_store::Item;

/// The client script served at `/browser.js`.
pub(crate) const BROWSER_JS: &str = include_str!("../assets/browser.js");

/// Renders the page around a snapshot of every stored item.
///
/// The snapshot is embedded as a JSON array in an inline script block and
/// picked up by the client script as `items`. `<` is escaped in the
/// embedded JSON so no value can terminate the script block early.
pub(crate) fn render(items: &[Item]) -> Result<String, serde_json::Error> {
    let snapshot = serde_json::to_string(items)?.replace('<', "\\u003c");
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Ticklist</title>
</head>
<body>
  <main>
    <h1>Ticklist</h1>
    <form id="create-form">
      <input id="create-field" type="text" autofocus autocomplete="off">
      <button>Add item</button>
    </form>
    <ul id="item-list"></ul>
  </main>
  <script>
    let items = {snapshot};
  </script>
  <script src="/browser.js"></script>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_embeds_empty_snapshot() {
        let html = render(&[]).unwrap();
        assert!(html.contains("let items = [];"));
    }

    #[test]
    fn render_embeds_items_as_json() {
        let items = vec![Item::new("walk the dog")];
        let html = render(&items).unwrap();
        assert!(html.contains("walk the dog"));
        assert!(html.contains(&items[0].id.to_string()));
        assert!(html.contains(r#""_id""#));
    }

    #[test]
    fn render_escapes_angle_brackets_in_snapshot() {
        // Stored text never contains markup, but the render must not
        // depend on that.
        let items = vec![Item::new("</script><script>alert(1)</script>")];
        let html = render(&items).unwrap();
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains("\\u003c/script>"));
    }

    #[test]
    fn render_references_client_script() {
        let html = render(&[]).unwrap();
        assert!(html.contains(r#"<script src="/browser.js"></script>"#));
    }

    #[test]
    fn browser_js_is_bundled() {
        assert!(BROWSER_JS.contains("create-form"));
        assert!(BROWSER_JS.contains("/create-item"));
        assert!(BROWSER_JS.contains("/update-item"));
        assert!(BROWSER_JS.contains("/delete-item"));
    }
}
