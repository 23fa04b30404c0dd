//! Build script to generate the dispatch table and documentation.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use generator::DocumentationItem;

const SPEC_SOURCE: &str = "src/directives.spec";

const FORMS_CODE: &str = "forms.rs";

const DOC_TEXT: &str = "doc.txt";

fn main() {
    println!("cargo:rerun-if-changed={}", SPEC_SOURCE);

    let specs = generator::source::parse_specs(SPEC_SOURCE).expect("Failed to parse SPEC_SOURCE");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());

    let forms = File::create(out_dir.join(FORMS_CODE)).expect("Create FORMS_CODE file");
    generator::forms::generate_forms(BufWriter::new(forms), &specs)
        .expect("Failed to generate dispatch table.");

    let items: Vec<DocumentationItem> = specs.iter().map(DocumentationItem::from).collect();
    let doc = File::create(out_dir.join(DOC_TEXT)).expect("Create DOC_TEXT file");
    generator::docs::generate_plain_text(BufWriter::new(doc), &items)
        .expect("Failed to generate documentation.");
}
