//! HTML output through minijinja templates.
//!
//! The built-in template produces a standalone document: a `<style>` block
//! generated from the table's scoped styles, the title and section lines,
//! and the `<table>` markup. Each body cell carries its layered inline style
//! (table default, row, column, cell).
//!
//! A custom template set with [`Table::set_html_template`] receives the same
//! context:
//!
//! | key          | value                                                      |
//! |--------------|------------------------------------------------------------|
//! | `title`      | title text                                                 |
//! | `sections`   | non-empty section lines as `{class, text}`                 |
//! | `style`      | generated CSS rules (safe)                                 |
//! | `custom_css` | contents of the [`Table::set_html_css`] file (safe)        |
//! | `table`      | the generated `<table>` element (safe)                     |
//! | `headers`    | `{title, style}` per column                                |
//! | `rows`       | per row, `{text, style}` per cell                          |
//! | `pages`      | `{id, title, sections, table}` per table                   |
//!
//! Templates render with HTML auto-escaping; the keys marked safe are
//! inserted verbatim.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use minijinja::{context, Environment, HtmlEscape, Value};
use once_cell::sync::Lazy;

use crate::error::{RenderError, TableError};
use crate::table::{Section, StyleList};
use crate::Table;

const TEMPLATE_NAME: &str = "table.html";
const NOTICE_NAME: &str = "notice.html";

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    if let Err(err) = env.add_template(TEMPLATE_NAME, include_str!("templates/table.html")) {
        log::error!("built-in table template is invalid: {}", err);
    }
    if let Err(err) = env.add_template(NOTICE_NAME, include_str!("templates/notice.html")) {
        log::error!("built-in notice template is invalid: {}", err);
    }
    env
});

/// Renders `table` as a standalone HTML document.
pub fn render(table: &Table) -> Result<String, RenderError> {
    render_many(std::slice::from_ref(table))
}

/// Renders several tables into one document, one page section per table
/// with a page break between sections.
///
/// The first table's template and stylesheet settings apply to the whole
/// document. An empty slice is [`RenderError::NoTables`].
pub fn render_many(tables: &[Table]) -> Result<String, RenderError> {
    let Some(first) = tables.first() else {
        return Err(RenderError::NoTables);
    };
    for table in tables {
        table.has_headers()?;
        table.has_data()?;
    }
    debug!("rendering html: {} table(s)", tables.len());

    let mut style = String::from(PAGE_BREAK_CSS);
    let mut pages = Vec::with_capacity(tables.len());
    for (n, table) in tables.iter().enumerate() {
        let id = format!("tabkit-{}", n);
        style.push_str(&scoped_css(table, &id));
        pages.push(context! {
            id => id,
            title => table.title(),
            sections => sections(table),
            table => Value::from_safe_string(table_markup(table)),
        });
    }

    let custom_css = match first.html_css() {
        Some(path) => read_resource(path)?,
        None => String::new(),
    };

    let ctx = context! {
        title => first.title(),
        sections => sections(first),
        style => Value::from_safe_string(style),
        custom_css => Value::from_safe_string(custom_css),
        table => Value::from_safe_string(table_markup(first)),
        headers => headers(first),
        rows => rows(first),
        pages => pages,
    };

    let html = match first.html_template() {
        Some(path) => {
            let source = read_resource(path)?;
            ENV.render_named_str(TEMPLATE_NAME, &source, ctx)?
        }
        None => ENV.get_template(TEMPLATE_NAME)?.render(ctx)?,
    };
    Ok(html)
}

/// Writes the HTML rendering to `w`.
///
/// When the table has no columns or no rows, a notice document carrying the
/// error message is written first, styled with the table's no-headers or
/// no-rows style, and the error is then returned.
pub fn write<W: Write + ?Sized>(table: &Table, w: &mut W) -> Result<(), RenderError> {
    match render(table) {
        Ok(html) => {
            w.write_all(html.as_bytes())?;
            Ok(())
        }
        Err(err) => {
            if let Some(table_err) = err.table_error() {
                let notice_style = match table_err {
                    TableError::NoColumns => table.no_headers_style(),
                    _ => table.no_rows_style(),
                };
                let notice = render_notice(&err.to_string(), notice_style)?;
                w.write_all(notice.as_bytes())?;
            }
            Err(err)
        }
    }
}

fn render_notice(message: &str, style: &StyleList) -> Result<String, RenderError> {
    let ctx = context! {
        message => message,
        style => Value::from_safe_string(style.to_inline()),
    };
    Ok(ENV.get_template(NOTICE_NAME)?.render(ctx)?)
}

const PAGE_BREAK_CSS: &str = ".tabkit-page + .tabkit-page { page-break-before: always; }\n";

fn sections(table: &Table) -> Vec<Value> {
    Section::ALL
        .iter()
        .enumerate()
        .filter(|(_, s)| !table.section(**s).is_empty())
        .map(|(i, s)| {
            context! {
                class => format!("section{}", i + 1),
                text => table.section(*s),
            }
        })
        .collect()
}

fn headers(table: &Table) -> Vec<Value> {
    table
        .columns()
        .iter()
        .map(|c| {
            context! {
                title => c.title(),
                style => StyleList::layered(&[table.header_style(), c.header_style()]),
            }
        })
        .collect()
}

fn rows(table: &Table) -> Vec<Vec<Value>> {
    (0..table.row_count())
        .map(|row| {
            (0..table.col_count())
                .map(|col| {
                    context! {
                        text => table.formatted(row, col),
                        style => table.cell_inline_style(row, col),
                    }
                })
                .collect()
        })
        .collect()
}

fn css_rule(out: &mut String, selector: &str, decls: &str) {
    if decls.is_empty() {
        return;
    }
    let _ = writeln!(out, "{} {{ {} }}", selector, decls);
}

/// CSS rules for one table, scoped under `#id`.
fn scoped_css(table: &Table, id: &str) -> String {
    let mut css = String::new();
    css_rule(&mut css, &format!("#{} .title", id), &table.title_style().to_inline());
    for (i, section) in Section::ALL.iter().enumerate() {
        css_rule(
            &mut css,
            &format!("#{} .section{}", id, i + 1),
            &table.section_style(*section).to_inline(),
        );
    }
    css_rule(&mut css, &format!("#{} th", id), &table.header_style().to_inline());

    for (i, column) in table.columns().iter().enumerate() {
        css_rule(
            &mut css,
            &format!("#{} th.col{}", id, i),
            &column.header_style().to_inline(),
        );
        let mut decls = column.style().to_inline();
        if let Some(width) = column.html_width() {
            let _ = write!(decls, "width:{};", width);
        }
        css_rule(&mut css, &format!("#{} td.col{}", id, i), &decls);
    }
    css
}

/// The `<table>` element with escaped cell content.
fn table_markup(table: &Table) -> String {
    let mut out = String::from("<table class=\"tabkit\">\n<thead>\n<tr>");
    for (i, column) in table.columns().iter().enumerate() {
        let _ = write!(out, "<th class=\"col{}\">{}</th>", i, HtmlEscape(column.title()));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in 0..table.row_count() {
        out.push_str("<tr>");
        for col in 0..table.col_count() {
            let style = table.cell_inline_style(row, col);
            let text = table.formatted(row, col);
            if style.is_empty() {
                let _ = write!(out, "<td class=\"col{}\">{}</td>", col, HtmlEscape(&text));
            } else {
                let _ = write!(
                    out,
                    "<td class=\"col{}\" style=\"{}\">{}</td>",
                    col,
                    HtmlEscape(&style),
                    HtmlEscape(&text)
                );
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}

fn read_resource(path: &Path) -> Result<String, RenderError> {
    fs::read_to_string(path).map_err(|source| RenderError::Resource {
        path: path.to_path_buf(),
        source,
    })
}
