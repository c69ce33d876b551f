//! Writes build targets back to the XML format that [`super::reader`] understands

use std::borrow::Cow;
use std::io::Write;

use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;

use crate::domain::target::BuildTarget;
use crate::utils::constants::{xml, LINE_SEPARATOR};

/// Serializes *targets*, in the order given, as an indented UTF-8 document that uses the
/// platform line separator
pub(super) fn write_targets<'t, I>(targets: I) -> Result<String, quick_xml::Error>
where
    I: IntoIterator<Item = &'t BuildTarget>,
{
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', xml::INDENT_SIZE);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut targets = targets.into_iter().peekable();
    if targets.peek().is_none() {
        writer.write_event(Event::Empty(BytesStart::new(xml::BUILD_TARGETS_ELEMENT)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(xml::BUILD_TARGETS_ELEMENT)))?;
        for target in targets {
            write_target(&mut writer, target)?;
        }
        writer.write_event(Event::End(BytesEnd::new(xml::BUILD_TARGETS_ELEMENT)))?;
    }

    let mut document = String::from_utf8(writer.into_inner())
        .map_err(|e| quick_xml::Error::NonDecodable(Some(e.utf8_error())))?;
    document.push('\n');

    if LINE_SEPARATOR != "\n" {
        document = document.replace('\n', LINE_SEPARATOR);
    }
    Ok(document)
}

fn write_target<W: Write>(
    writer: &mut Writer<W>,
    target: &BuildTarget,
) -> Result<(), quick_xml::Error> {
    let element = BytesStart::new(xml::TARGET_ELEMENT).with_attributes([
        attribute(xml::TARGET_ID_ATTR, target.target_id()),
        attribute(xml::NAME_ATTR, target.name()),
    ]);
    writer.write_event(Event::Start(element))?;

    write_text_element(writer, xml::STOP_ON_ERROR, bool_text(target.stop_on_error()))?;
    write_text_element(
        writer,
        xml::USE_DEFAULT_COMMAND,
        bool_text(target.use_default_build_command()),
    )?;
    if let Some(command) = target.build_command() {
        write_text_element(writer, xml::BUILD_COMMAND, &command.to_string_lossy())?;
    }
    if let Some(arguments) = target.build_arguments() {
        write_text_element(writer, xml::BUILD_ARGUMENTS, arguments)?;
    }

    writer.write_event(Event::End(BytesEnd::new(xml::TARGET_ELEMENT)))
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    // A raw carriage return would be read back as a line feed
    let escaped = escape(text).replace('\r', "&#13;");

    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))
}

/// An attribute whose value survives attribute value normalization: the whitespace
/// characters other than the plain space are written as character references
fn attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    let mut escaped = String::with_capacity(value.len());
    for c in escape(value).chars() {
        match c {
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            c => escaped.push(c),
        }
    }

    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    }
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::Project;

    fn lines(document: &str) -> Vec<&str> {
        document.lines().collect()
    }

    #[test]
    fn test_empty_document() {
        let document = write_targets(Vec::<&BuildTarget>::new()).unwrap();

        assert_eq!(
            lines(&document),
            vec![
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                "<buildTargets/>"
            ]
        );
        assert!(document.ends_with(LINE_SEPARATOR));
    }

    #[test]
    fn test_indented_target() {
        let project = Project::new("P");
        let mut debug = BuildTarget::new(project.root(), "Debug");
        debug.set_stop_on_error(true);
        debug.set_build_command(Some("/usr/bin/make"));
        debug.set_build_arguments(Some("-j4 all"));
        let lib = BuildTarget::new(project.container_for("src/lib"), "lib");

        let document = write_targets([&debug, &lib]).unwrap();

        assert_eq!(
            lines(&document),
            vec![
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                "<buildTargets>",
                r#"  <target targetID="" name="Debug">"#,
                "    <stopOnError>true</stopOnError>",
                "    <useDefaultCommand>false</useDefaultCommand>",
                "    <buildCommand>/usr/bin/make</buildCommand>",
                "    <buildArguments>-j4 all</buildArguments>",
                "  </target>",
                r#"  <target targetID="src/lib" name="lib">"#,
                "    <stopOnError>false</stopOnError>",
                "    <useDefaultCommand>false</useDefaultCommand>",
                "  </target>",
                "</buildTargets>",
            ]
        );
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let mut target = BuildTarget::new(Project::new("P").root(), "a<b>&\"c\"");
        target.set_build_arguments(Some("CFLAGS='-O2' && echo <done>"));

        let document = write_targets([&target]).unwrap();

        assert!(!document.contains("<b>"));
        assert!(!document.contains("<done>"));
        assert!(document.contains("&amp;"));
    }

    #[test]
    fn test_whitespace_in_attributes_is_written_as_references() {
        let project = Project::new("P");
        let target = BuildTarget::new(project.container_for("my\tdir"), "a\tb\nc\r");

        let document = write_targets([&target]).unwrap();

        assert!(document.contains(r#"<target targetID="my&#9;dir" name="a&#9;b&#10;c&#13;">"#));
    }

    #[test]
    fn test_carriage_returns_in_text_are_written_as_references() {
        let mut target = BuildTarget::new(Project::new("P").root(), "all");
        target.set_build_arguments(Some("a\rb"));

        let document = write_targets([&target]).unwrap();

        assert!(document.contains("<buildArguments>a&#13;b</buildArguments>"));
    }
}
