//! `convert_to_pdf <input_file> <output_file>`: convert a document or image to PDF.

fn main() -> anyhow::Result<()> {
    docshift::cli::main(docshift::TargetFormat::Pdf)
}
