use clap::Parser;
use photodoc::config::{DocConfig, FormatMode, Overrides};
use photodoc::{generate, layout, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photodoc")]
#[command(about = "Turn a folder of photos into a single report document")]
#[command(long_about = "\
Turn a folder of photos into a single report document

Scans a directory (non-recursive) for pictures (jpg, jpeg, png, bmp, gif)
and writes <title>.html into it, with every picture sized by orientation:
portrait pictures are pinned to --pic-height, landscape pictures to
--pic-width, and the free axis keeps the aspect ratio.

Two layouts:

  normal   a flat flow of picture + caption pairs
  table    a fixed-column grid alternating caption and picture cells

Captions are the filename up to the first dot. Pictures whose dimensions
cannot be read from their headers are sized as landscape and reported on
stderr; they never abort the document.

Example: photodoc -P ~/Pictures -T Report --title-date n -f table")]
#[command(version)]
struct Cli {
    /// Directory to scan for pictures (non-recursive)
    #[arg(short = 'P', long = "path")]
    path: Option<PathBuf>,

    /// Layout mode for the document body
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<FormatMode>,

    /// Document title; also names the output file
    #[arg(short = 'T', long = "title")]
    title: Option<String>,

    /// Append the current date to the title (DDMonYYYY)
    #[arg(long = "title-date", value_name = "y|n", value_parser = ["y", "n"])]
    title_date: Option<String>,

    /// Width in inches for landscape pictures
    #[arg(long = "pic-width", value_name = "INCHES")]
    pic_width: Option<f64>,

    /// Height in inches for portrait pictures
    #[arg(long = "pic-height", value_name = "INCHES")]
    pic_height: Option<f64>,

    /// Cells per table row; requires --format table
    #[arg(long = "table-columns", value_name = "N")]
    table_columns: Option<u32>,

    /// Also print the composed document model as JSON
    #[arg(long)]
    manifest: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = DocConfig::from_overrides(Overrides {
        root: cli.path,
        title: cli.title,
        append_date: cli.title_date.map(|v| v == "y"),
        picture_width_in: cli.pic_width,
        picture_height_in: cli.pic_height,
        table_columns: cli.table_columns,
        format: cli.format,
    })?;

    let pictures = scan::enumerate(&config.root)?;
    output::print_scan_summary(&config.root, &pictures);

    let composed = layout::compose(&pictures, &config);
    output::print_probe_warnings(&composed.warnings);

    if cli.manifest {
        let manifest = serde_json::json!({
            "config": &config,
            "pictures": &pictures,
            "document": &composed.model,
            "warnings": &composed.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    }

    let title = config.document_title();
    let written = generate::write_document(&composed.model, &title, &config.root)?;
    output::print_generate_summary(&written, &composed.model);

    Ok(())
}
