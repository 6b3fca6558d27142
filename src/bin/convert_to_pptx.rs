//! `convert_to_pptx <input_file> <output_file>`: convert a document or image to PPTX.

fn main() -> anyhow::Result<()> {
    docshift::cli::main(docshift::TargetFormat::Pptx)
}
