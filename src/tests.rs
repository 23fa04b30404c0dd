//! Interpret templates in `tests/ui/*.tpl`, and compare their outputs with
//! the `.output` files.
//!
//! If the template fails, the error is added to the output as a final
//! `error: ...` line.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Interpret a template, with paths relative to the package root.
fn render_template(template: &str) -> String {
    let mut output = Vec::new();
    let result = crate::interpret(template, &mut output, io::sink());

    let mut output = String::from_utf8(output).unwrap();
    if let Err(e) = result {
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }

        output.push_str(&format!("error: {}\n", e));
    }

    output
}

#[test]
fn check_ui() {
    let target = {
        let mut target = match env::var_os("CARGO_TARGET_DIR") {
            Some(t) => PathBuf::from(t),
            None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target"),
        };

        target.push("ui");
        target.push(env!("CARGO_PKG_NAME"));

        fs::create_dir_all(&target).unwrap();

        target
    };

    let mut failed = 0;
    let mut checked = 0;
    for source in fs::read_dir("tests/ui").unwrap() {
        let path = source.unwrap().path();

        if path.extension() != Some(OsStr::new("tpl")) {
            continue;
        }

        let expected_output = {
            let mut exp_path = path.clone();
            exp_path.set_extension("output");
            fs::read_to_string(exp_path).unwrap_or_default()
        };

        let test_output = render_template(&fs::read_to_string(&path).unwrap());
        checked += 1;

        if test_output != expected_output {
            let test_name = path.file_name().unwrap();
            let mut output_copy = target.join(test_name);
            output_copy.set_extension("current-output");

            failed += 1;
            eprintln!("### {}: failed", path.display());
            eprintln!("=== OUTPUT ({})\n{}\n", output_copy.display(), test_output);
            eprintln!("=== EXPECTED\n{}\n", expected_output);

            fs::write(output_copy, test_output).unwrap();
        }
    }

    assert!(checked > 0, "no templates in tests/ui");
    assert_eq!(failed, 0);
}

#[test]
fn help_lists_every_form() {
    let help = std::str::from_utf8(crate::HELP).unwrap();

    for form in crate::FORMS {
        let usage = format!("%{}", form.usage);
        assert!(help.contains(&usage), "{} is not documented", usage);
    }
}
