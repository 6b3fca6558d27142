//! `convert_to_docx <input_file> <output_file>`: convert a document or image to DOCX.

fn main() -> anyhow::Result<()> {
    docshift::cli::main(docshift::TargetFormat::Docx)
}
