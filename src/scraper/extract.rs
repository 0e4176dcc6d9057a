// src/scraper/extract.rs
use crate::domain::Listing;
use crate::scraper::ScrapeError;
use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// Phrase the site renders inside a row-group when a size bucket has no
/// sales for the area.
const NO_RESULTS_PHRASE: &str = "Ei tuloksia";

/// Cell text meaning "yes" in the elevator column. Anything else, including
/// the empty cell, means no elevator.
const ELEVATOR_YES: &str = "on";

/// Listings extracted from one page, plus whatever was wrong with the rows
/// that did not survive. Issues are reported, never fatal; a bad row is
/// skipped and the walk continues.
#[derive(Debug)]
pub struct PageExtract {
    pub listings: Vec<Listing>,
    pub issues: Vec<ExtractIssue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractIssue {
    /// A data row turned up before any section header in its group, so its
    /// apartment type is unknowable. The row is dropped.
    RowBeforeHeader { group: usize },
    /// A data row with fewer than the twelve expected cells.
    ShortRow { group: usize, cells: usize },
    /// A numeric cell that did not parse. The field keeps `None`.
    BadNumber { field: &'static str, raw: String },
}

impl fmt::Display for ExtractIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractIssue::RowBeforeHeader { group } => {
                write!(f, "data row before any section header in group {group}")
            }
            ExtractIssue::ShortRow { group, cells } => {
                write!(f, "data row with {cells} cells in group {group}, expected 12")
            }
            ExtractIssue::BadNumber { field, raw } => {
                write!(f, "unparseable number in {field}: {raw:?}")
            }
        }
    }
}

/// Walk the result table of one page.
///
/// Only row-groups that are visible data groups count: class `odd` or
/// `even`, at least one section-marker cell, and no no-results phrase.
/// Inside a group, a single-cell row is a section header whose label (the
/// emphasized child) applies to the data rows after it; every other row
/// maps its twelve positional cells onto a listing.
pub fn extract_page(html: &str) -> Result<PageExtract, ScrapeError> {
    let document = Html::parse_document(html);

    let group_sel = parse_selector("#mainTable tbody")?;
    let section_sel = parse_selector("td.section")?;
    let row_sel = parse_selector("tr")?;
    let cell_sel = parse_selector("td")?;
    let label_sel = parse_selector("strong")?;

    let mut listings = Vec::new();
    let mut issues = Vec::new();

    for (group_index, group) in document.select(&group_sel).enumerate() {
        let class = group.value().attr("class").unwrap_or("");
        if class != "odd" && class != "even" {
            continue;
        }
        if group.select(&section_sel).next().is_none() {
            continue;
        }
        // An empty size bucket renders as a group with just the phrase.
        if group.text().any(|t| t.contains(NO_RESULTS_PHRASE)) {
            continue;
        }

        let mut apartment_type: Option<String> = None;

        for row in group.select(&row_sel) {
            let cells: Vec<ElementRef> = row.select(&cell_sel).collect();

            match cells.len() {
                0 => {} // th-only rows and the like
                1 => {
                    apartment_type = Some(header_label(&cells[0], &label_sel));
                }
                n if n >= 12 => match &apartment_type {
                    Some(section) => {
                        listings.push(data_row(section, &cells, &mut issues));
                    }
                    None => {
                        issues.push(ExtractIssue::RowBeforeHeader { group: group_index });
                    }
                },
                n => {
                    issues.push(ExtractIssue::ShortRow {
                        group: group_index,
                        cells: n,
                    });
                }
            }
        }
    }

    Ok(PageExtract { listings, issues })
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::HtmlParse(e.to_string()))
}

/// Section headers carry their label in an emphasized child; fall back to
/// the raw cell text when the markup is missing it.
fn header_label(cell: &ElementRef, label_sel: &Selector) -> String {
    match cell.select(label_sel).next() {
        Some(label) => element_text(&label),
        None => element_text(cell),
    }
}

fn data_row(
    apartment_type: &str,
    cells: &[ElementRef],
    issues: &mut Vec<ExtractIssue>,
) -> Listing {
    let mut number = |field: &'static str, cell: &ElementRef| -> Option<f64> {
        let raw = element_text(cell);
        if raw.is_empty() {
            return None;
        }
        match parse_decimal(&raw) {
            Some(value) => Some(value),
            None => {
                issues.push(ExtractIssue::BadNumber { field, raw });
                None
            }
        }
    };

    let area_sqm = number("areaSqm", &cells[3]);
    let price = number("price", &cells[4]);
    let price_per_sqm = number("pricePerSqm", &cells[5]);
    let construction_year = number("constructionYear", &cells[6]);

    Listing {
        apartment_type: apartment_type.to_string(),
        neighborhood: element_text(&cells[0]),
        room_layout: element_text(&cells[1]),
        building_type: element_text(&cells[2]),
        area_sqm,
        price,
        price_per_sqm,
        construction_year,
        floor_info: element_text(&cells[7]),
        has_elevator: element_text(&cells[8]) == ELEVATOR_YES,
        condition: element_text(&cells[9]),
        ownership_type: element_text(&cells[10]),
        energy_class: element_text(&cells[11]),
        fingerprint: String::new(),
    }
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Locale-aware number parse: the site writes decimals with a comma and
/// pads thousands with spaces. The comma is the decimal point here, never a
/// thousands separator.
fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned.parse().ok()
}
