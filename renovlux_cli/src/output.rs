use anyhow::Result;
use renovlux_lib::types::{PageInfo, PortfolioItem, Product, Service};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to the table layout.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct ServiceRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: String,
    #[tabled(rename = "Features")]
    #[serde(rename = "Features")]
    features: String,
}

#[derive(Tabled, Serialize)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Images")]
    #[serde(rename = "Images")]
    images: usize,
    #[tabled(rename = "Updated")]
    #[serde(rename = "Updated")]
    updated: String,
}

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Availability")]
    #[serde(rename = "Availability")]
    availability: String,
}

/// Formula-looking cells are prefixed with a tab so spreadsheets open them
/// as text.
trait CsvSafe {
    fn csv_safe(self) -> Self;
}

impl CsvSafe for ServiceRow {
    fn csv_safe(self) -> Self {
        Self {
            title: sanitize_csv_field(&self.title),
            slug: sanitize_csv_field(&self.slug),
            features: sanitize_csv_field(&self.features),
            ..self
        }
    }
}

impl CsvSafe for ProjectRow {
    fn csv_safe(self) -> Self {
        Self {
            title: sanitize_csv_field(&self.title),
            category: sanitize_csv_field(&self.category),
            ..self
        }
    }
}

impl CsvSafe for ProductRow {
    fn csv_safe(self) -> Self {
        Self {
            name: sanitize_csv_field(&self.name),
            category: sanitize_csv_field(&self.category),
            ..self
        }
    }
}

// -- Row builders --

fn build_service_rows(services: &[Service]) -> Vec<ServiceRow> {
    services
        .iter()
        .map(|s| ServiceRow {
            id: s.id.clone(),
            title: s.title.clone(),
            slug: s.slug.clone(),
            active: if s.is_active { "yes" } else { "no" }.to_string(),
            features: s.features.join(", "),
        })
        .collect()
}

fn build_project_rows(projects: &[PortfolioItem]) -> Vec<ProjectRow> {
    projects
        .iter()
        .map(|p| ProjectRow {
            id: p.id.clone(),
            title: p.title.clone(),
            category: p.category.clone(),
            images: 1 + p.secondary_images.len(),
            updated: format_date(&p.updated_at),
        })
        .collect()
}

fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            price: format_price(p.price),
            availability: p.availability.to_string(),
        })
        .collect()
}

// -- Printers --

fn print_rows<R, D>(rows: Vec<R>, data: &D, format: OutputFormat) -> Result<()>
where
    R: Tabled + Serialize + CsvSafe,
    D: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row.csv_safe())?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(data),
    }
    Ok(())
}

pub fn print_services(services: &[Service], format: OutputFormat) -> Result<()> {
    print_rows(build_service_rows(services), services, format)
}

pub fn print_projects(projects: &[PortfolioItem], format: OutputFormat) -> Result<()> {
    print_rows(build_project_rows(projects), projects, format)
}

pub fn print_products(products: &[Product], format: OutputFormat) -> Result<()> {
    print_rows(build_product_rows(products), products, format)
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Page summary on stderr, so piped output stays clean.
pub fn print_page_info(pagination: Option<&PageInfo>, what: &str, shown: usize) {
    match pagination {
        Some(p) => eprintln!(
            "Page {}/{} ({} total {})",
            p.page, p.total_pages, p.total, what
        ),
        None => eprintln!("{} {}", shown, what),
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2} €", p),
        None => "sur devis".to_string(),
    }
}

/// Shows the date part of RFC 3339 timestamps and leaves anything else as is.
fn format_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn sanitize_csv_field(value: &str) -> String {
    match value.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("\t{}", value),
        _ => value.to_string(),
    }
}
