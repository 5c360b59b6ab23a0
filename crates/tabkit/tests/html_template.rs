//! Custom HTML templates and stylesheets loaded from disk.

use std::io::Write;

use tabkit::render::html;
use tabkit::{CellType, Justify, RenderError, Table};

fn table() -> Table {
    let mut t = Table::new();
    t.set_title("Roster <2017>");
    t.add_column("Name", 10, CellType::String, Justify::Left);
    t.add_column("Age", 3, CellType::Int, Justify::Right);
    for (name, age) in [("Al", 47), ("Alexandria", 56)] {
        t.add_row();
        t.put_str(-1, 0, name);
        t.put_int(-1, 1, age);
    }
    t.set_cell_style(1, 1, [("color", "red")]).unwrap();
    t
}

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn custom_template_gets_structured_context() {
    let template = write_temp(
        ".html",
        "<h2>{{ title }}</h2>\n\
         {% for h in headers %}[{{ h.title }}]{% endfor %}\n\
         {% for row in rows %}{% for cell in row %}<{{ cell.text }}|{{ cell.style }}>{% endfor %}\n{% endfor %}",
    );
    let mut t = table();
    t.set_html_template(template.path());

    let out = html::render(&t).unwrap();
    assert!(out.contains("<h2>Roster &lt;2017&gt;</h2>"));
    assert!(out.contains("[Name][Age]"));
    assert!(out.contains("<Al|><47|>"));
    assert!(out.contains("<Alexandria|><56|color:red;>"));
}

#[test]
fn custom_template_can_embed_generated_table() {
    let template = write_temp(
        ".html",
        "<html><head><style>{{ style }}{{ custom_css }}</style></head><body>{{ table }}</body></html>",
    );
    let css = write_temp(".css", "table.tabkit { border: 1px solid black; }");
    let mut t = table();
    t.set_html_template(template.path());
    t.set_html_css(css.path());

    let out = html::render(&t).unwrap();
    assert!(out.contains("<table class=\"tabkit\">"));
    assert!(out.contains("table.tabkit { border: 1px solid black; }"));
    assert!(out.contains("<td class=\"col1\" style=\"color:red;\">56</td>"));
}

#[test]
fn custom_css_is_appended_to_default_template() {
    let css = write_temp(".css", "td { font-family: monospace; }");
    let mut t = table();
    t.set_html_css(css.path());

    let out = html::render(&t).unwrap();
    let style_start = out.find("<style>").unwrap();
    let style_end = out.find("</style>").unwrap();
    assert!(out[style_start..style_end].contains("td { font-family: monospace; }"));
}

#[test]
fn missing_css_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut t = table();
    t.set_html_css(dir.path().join("missing.css"));

    match html::render(&t) {
        Err(RenderError::Resource { path, .. }) => assert!(path.ends_with("missing.css")),
        other => panic!("expected resource error, got {:?}", other),
    }
}

#[test]
fn broken_template_is_a_template_error() {
    let template = write_temp(".html", "{% for x in %}");
    let mut t = table();
    t.set_html_template(template.path());
    assert!(matches!(html::render(&t), Err(RenderError::Template(_))));
}
