//! Parse the `directives.spec` file and generate the dispatch table and the
//! documentation.

pub mod docs;
pub mod forms;
pub mod source;

#[derive(Default)]
pub struct DirectiveSpec {
    usage: String,
    description: String,
    action: String,
}

impl DirectiveSpec {
    /// Name of the command, as it has to appear after the `%` marker.
    ///
    /// It is the usage string up to the first placeholder, so `file <path>`
    /// has the name `"file "` and `{num}` has an empty name.
    pub fn name(&self) -> &str {
        let end = self.usage.find(['<', '{']).unwrap_or(self.usage.len());
        &self.usage[..end]
    }
}

pub struct DocumentationItem {
    pub specs: String,
    pub doc: String,

    /// `true` if the directive takes a `{num}` argument.
    pub numeric: bool,
}

impl From<&DirectiveSpec> for DocumentationItem {
    fn from(spec: &DirectiveSpec) -> Self {
        DocumentationItem {
            specs: format!("%{}", spec.usage),
            doc: spec.description.clone(),
            numeric: spec.usage.contains("{num}"),
        }
    }
}

#[test]
fn names_from_usage() {
    let spec = |usage: &str| DirectiveSpec {
        usage: usage.into(),
        ..Default::default()
    };

    assert_eq!(spec("file <path>").name(), "file ");
    assert_eq!(spec("empty").name(), "empty");
    assert_eq!(spec("dddd{num}").name(), "dddd");
    assert_eq!(spec("-{num}").name(), "-");
    assert_eq!(spec("{num}").name(), "");
}

#[cfg(test)]
fn generate(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let specs = source::parse_source(source.as_bytes())?;
    let mut output = vec![];
    forms::generate_forms(&mut output, &specs)?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn longest_names_first() {
    let code = generate(
        "# header\n\
         :d{num}\n//! One byte.\nAction::One\n\n\
         :stop\nAction::Stop\n\
         :ddd{num}\n//! Three bytes.\nAction::Three\n",
    )
    .unwrap();

    let position = |name: &str| code.find(name).unwrap();
    assert!(position("\"stop\"") < position("\"ddd\""));
    assert!(position("\"ddd\"") < position("\"d\""));
    assert!(code.contains("Three"));
}

#[test]
fn reject_duplicated_names() {
    let error = generate(":dd{num}\nAction::A\n:dd<count>\nAction::B\n").unwrap_err();
    assert_eq!(error.to_string(), "conflicts: dd<count> - dd{num}");
}

#[test]
fn reject_missing_actions() {
    let error = generate(":empty\n//! No action.\n:stop\nAction::Stop\n").unwrap_err();
    assert_eq!(error.to_string(), "missing action for 'empty'");
}
