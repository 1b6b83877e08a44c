//! Table classification and row extraction from Confluence page markup.
//!
//! A page contains one documentation block per endpoint
//! (`.plugin-tabmeta-details`), each with an `h1[id]` heading and zero or
//! more `.confluenceTable` tables describing payload, response,
//! path-parameter, or error-code shapes. This module walks the parsed
//! document and lowers every usable table into a [`TsInterface`].

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::heading::{ApiDescriptor, parse_heading};
use crate::ir::types::{TsInterface, TsProp};
use crate::typemap::resolve_type;

static BRACKET_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    let re = Regex::new(r"^[A-Za-z]+\[\]$").unwrap();
    re
});

/// Semantic role of a documentation table, derived from its label row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    Payload,
    Response,
    PathParameter,
}

impl TableRole {
    /// Map a label text to a role. The label is compared with all whitespace
    /// removed, case-insensitive; unrecognized labels default to `Payload`.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label.split_whitespace().collect::<String>().to_lowercase();
        match normalized.as_str() {
            "request" => TableRole::Payload,
            "responsedata" => TableRole::Response,
            "pathparameter" => TableRole::PathParameter,
            _ => TableRole::Payload,
        }
    }

    /// PascalCase suffix appended to the interface name.
    pub fn suffix(self) -> &'static str {
        match self {
            TableRole::Payload => "Payload",
            TableRole::Response => "Response",
            TableRole::PathParameter => "PathParameter",
        }
    }
}

/// Column positions resolved from a table's header row.
///
/// `None` means the header cell was absent; readers fall back to per-column
/// defaults instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnIndexes {
    pub parameter: Option<usize>,
    pub description: Option<usize>,
    pub ty: Option<usize>,
    pub required: Option<usize>,
}

/// Classification result for one table. Skip variants record why a table
/// produced no interface, so callers (and tests) can distinguish them.
#[derive(Debug, Clone, PartialEq)]
pub enum TableOutcome {
    Interface(TsInterface),
    /// Fewer than the minimum label + header + data rows.
    TooFewRows,
    /// Error-code tables (multiple styled header cells) are unsupported.
    ErrorCodeTable,
    /// Every data row was dropped, so no block is emitted.
    NoFields,
}

/// Document walker with precompiled selectors.
#[derive(Debug)]
pub struct Extractor {
    block: Selector,
    heading: Selector,
    table: Selector,
    row: Selector,
    label: Selector,
    para: Selector,
    strong: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            block: selector(".plugin-tabmeta-details")?,
            heading: selector("h1[id]")?,
            table: selector(".confluenceTable")?,
            row: selector("tbody tr")?,
            label: selector(".confluenceTh > p > strong")?,
            para: selector("p")?,
            strong: selector("strong")?,
        })
    }

    /// Extract interface blocks from raw page markup, in document order.
    pub fn generate_interfaces(&self, html: &str) -> Vec<TsInterface> {
        let document = Html::parse_document(html);
        let mut interfaces = Vec::new();

        for block in document.select(&self.block) {
            let heading: String = block
                .select(&self.heading)
                .next()
                .map(|h| h.text().collect::<String>())
                .unwrap_or_default();
            let api = parse_heading(heading.trim());

            for table in block.select(&self.table) {
                match self.classify_table(table, &api) {
                    TableOutcome::Interface(interface) => interfaces.push(interface),
                    outcome => {
                        tracing::debug!("Skipping table in block '{}': {outcome:?}", api.api_title);
                    }
                }
            }
        }

        interfaces
    }

    /// Classify one table and, when it is usable, extract its fields.
    pub fn classify_table(&self, table: ElementRef<'_>, api: &ApiDescriptor) -> TableOutcome {
        let rows: Vec<ElementRef<'_>> = table.select(&self.row).collect();
        // Label row, header row, and at least one data row
        if rows.len() < 3 {
            return TableOutcome::TooFewRows;
        }

        let label_cells = cells(rows[0])
            .into_iter()
            .filter(|cell| {
                cell.value()
                    .attr("class")
                    .is_some_and(|classes| classes.split_whitespace().any(|c| c == "confluenceTh"))
            })
            .count();
        if label_cells > 1 {
            return TableOutcome::ErrorCodeTable;
        }

        let label: String = rows[0].select(&self.label).flat_map(|e| e.text()).collect();
        let role = TableRole::from_label(&label);

        let columns = self.resolve_columns(&cells(rows[1]));

        let mut props = Vec::new();
        for row in &rows[2..] {
            let tds = cells(*row);
            if let Some(prop) = self.extract_field(&tds, &columns, role) {
                props.push(prop);
            }
        }

        if props.is_empty() {
            return TableOutcome::NoFields;
        }

        TableOutcome::Interface(TsInterface {
            title: api.api_title.clone(),
            name: format!("{}{}{}", api.http_method, api.api_name, role.suffix()),
            props,
        })
    }

    /// Locate named columns by the emphasized text of each header cell.
    fn resolve_columns(&self, header_cells: &[ElementRef<'_>]) -> ColumnIndexes {
        ColumnIndexes {
            parameter: self.find_column(header_cells, "Parameter"),
            description: self.find_column(header_cells, "Parameter Description"),
            ty: self.find_column(header_cells, "Type"),
            required: self.find_column(header_cells, "Required"),
        }
    }

    fn find_column(&self, header_cells: &[ElementRef<'_>], header: &str) -> Option<usize> {
        header_cells.iter().position(|cell| {
            cell.select(&self.strong)
                .flat_map(|e| e.text())
                .collect::<String>()
                .trim()
                == header
        })
    }

    /// Read one data row. Returns `None` when the parameter name is empty,
    /// which drops the row.
    fn extract_field(
        &self,
        tds: &[ElementRef<'_>],
        columns: &ColumnIndexes,
        role: TableRole,
    ) -> Option<TsProp> {
        let name = self.cell_text(tds, columns.parameter).unwrap_or_default();
        if name.is_empty() {
            return None;
        }
        let name = strip_brackets(&name);

        let doc = self.cell_text(tds, columns.description).unwrap_or_default();
        let required = self
            .cell_text(tds, columns.required)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "N".to_string());
        let token = self
            .cell_text(tds, columns.ty)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "any".to_string());

        // Only payload fields honor the Required column; response and
        // path-parameter fields are always required.
        let is_required = role != TableRole::Payload || required == "Y";

        Some(TsProp {
            name,
            doc,
            ty: resolve_type(&token),
            optional: !is_required,
        })
    }

    /// Text of a cell's paragraph content, trimmed. `None` when the column
    /// is absent or out of range for this row.
    fn cell_text(&self, tds: &[ElementRef<'_>], index: Option<usize>) -> Option<String> {
        let cell = tds.get(index?)?;
        Some(
            cell.select(&self.para)
                .flat_map(|p| p.text())
                .collect::<String>()
                .trim()
                .to_string(),
        )
    }
}

/// Direct element children of a row, i.e. its cells.
fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children().filter_map(ElementRef::wrap).collect()
}

/// Strip the trailing `[]` from names matching the `identifier[]` pattern.
fn strip_brackets(name: &str) -> String {
    if BRACKET_NAME_RE.is_match(name) {
        name.trim_end_matches("[]").to_string()
    } else {
        name.to_string()
    }
}

fn selector(css: &'static str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|err| format!("Invalid selector '{css}': {err}"))
}
