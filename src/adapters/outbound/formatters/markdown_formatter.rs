use crate::application::read_models::{ComponentView, LicenseReportModel, LicenseView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// Markdown table header for the license overview
const OVERVIEW_TABLE_HEADER: &str = "| License | Name | Components |\n";

/// Markdown table separator line for the license overview
const OVERVIEW_TABLE_SEPARATOR: &str = "|---------|------|------------|\n";

/// MarkdownFormatter adapter for a human-readable third-party notice document
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Escapes characters that would start Markdown link syntax
    fn escape_link_text(text: &str) -> String {
        text.replace('[', "\\[").replace(']', "\\]")
    }

    /// Anchor slug derived from a license id; distinct ids may share a slug
    fn license_anchor(id: &str) -> String {
        let slug: String = id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        format!("license-{}", slug)
    }

    /// Assigns every license a unique anchor
    ///
    /// Ids are visited in section order; a slug already taken gets the
    /// first free `-2`, `-3`, ... suffix.
    fn license_anchors(model: &LicenseReportModel) -> HashMap<String, String> {
        let ids = model
            .licenses
            .iter()
            .map(|license| &license.id)
            .chain(model.overview.iter().map(|entry| &entry.id));

        let mut used = HashSet::new();
        let mut anchors = HashMap::new();
        for id in ids {
            if anchors.contains_key(id) {
                continue;
            }
            let base = Self::license_anchor(id);
            let mut anchor = base.clone();
            let mut suffix = 2;
            while !used.insert(anchor.clone()) {
                anchor = format!("{}-{}", base, suffix);
                suffix += 1;
            }
            anchors.insert(id.clone(), anchor);
        }
        anchors
    }

    fn anchor_for(anchors: &HashMap<String, String>, id: &str) -> String {
        anchors
            .get(id)
            .cloned()
            .unwrap_or_else(|| Self::license_anchor(id))
    }

    /// Fence at least one backtick longer than any run inside `text`
    fn code_fence(text: &str) -> String {
        let mut longest = 0;
        let mut current = 0;
        for c in text.chars() {
            if c == '`' {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        "`".repeat(longest.max(2) + 1)
    }

    fn format_component(component: &ComponentView) -> String {
        let label = format!(
            "{} {}",
            Self::escape_link_text(&component.name),
            Self::escape_link_text(&component.version)
        );
        match &component.homepage {
            Some(url) => format!("[{}]({})", label, url),
            None => label,
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &LicenseReportModel) {
        output.push_str("# Third-Party Licenses\n\n");
        output.push_str(&format!(
            "Generated by {} {} on {} using SPDX license list {}.\n\n",
            model.metadata.tool_name,
            model.metadata.tool_version,
            model.metadata.generated_at,
            model.metadata.license_list_version
        ));
    }

    fn render_overview(
        &self,
        output: &mut String,
        model: &LicenseReportModel,
        anchors: &HashMap<String, String>,
    ) {
        output.push_str("## Overview\n\n");

        if model.overview.is_empty() {
            output.push_str("*No licenses found*\n\n");
            return;
        }

        output.push_str(OVERVIEW_TABLE_HEADER);
        output.push_str(OVERVIEW_TABLE_SEPARATOR);
        for entry in &model.overview {
            output.push_str(&format!(
                "| [{}](#{}) | {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.id),
                Self::anchor_for(anchors, &entry.id),
                Self::escape_markdown_table_cell(&entry.name),
                entry.count
            ));
        }
        output.push('\n');
    }

    fn render_unknown_licenses(&self, output: &mut String, model: &LicenseReportModel) {
        if model.unknown_licenses.is_empty() {
            return;
        }

        output.push_str("> ⚠️ **Unrecognized license declarations**\n>\n");
        output.push_str(
            "> The following declarations could not be mapped to an SPDX identifier and need review:\n>\n",
        );
        for id in &model.unknown_licenses {
            output.push_str(&format!("> - `{}`\n", id));
        }
        output.push('\n');
    }

    fn render_license(&self, output: &mut String, license: &LicenseView, anchor: &str) {
        output.push_str(&format!(
            "### <a id=\"{}\"></a>{} (`{}`)\n\n",
            anchor,
            license.name,
            license.id
        ));

        output.push_str("Used by:\n\n");
        for component in &license.components {
            output.push_str(&format!("- {}\n", Self::format_component(component)));
        }
        output.push('\n');

        if license.text_available {
            let fence = Self::code_fence(&license.text);
            output.push_str(&format!("{}text\n", fence));
            output.push_str(license.text.trim_end());
            output.push_str(&format!("\n{}\n\n", fence));
        } else {
            output.push_str("> ⚠️ **License text unavailable**\n>\n");
            for line in license.text.lines() {
                if line.trim().is_empty() {
                    output.push_str(">\n");
                } else {
                    output.push_str(&format!("> {}\n", line));
                }
            }
            output.push('\n');
        }
    }

    fn render_licenses(
        &self,
        output: &mut String,
        model: &LicenseReportModel,
        anchors: &HashMap<String, String>,
    ) {
        if model.licenses.is_empty() {
            return;
        }

        output.push_str("## Licenses\n\n");
        for license in &model.licenses {
            self.render_license(output, license, &Self::anchor_for(anchors, &license.id));
        }
    }

    fn render_notices(&self, output: &mut String, model: &LicenseReportModel) {
        if model.notices.is_empty() {
            return;
        }

        output.push_str("## Notices\n\n");
        for component in &model.notices {
            output.push_str(&format!("### {}\n\n", Self::format_component(component)));
            for line in component.copyright.lines() {
                output.push_str(line.trim_end());
                output.push_str("  \n");
            }
            output.push('\n');
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &LicenseReportModel) -> Result<String> {
        let mut output = String::new();
        let anchors = Self::license_anchors(model);

        self.render_header(&mut output, model);
        self.render_unknown_licenses(&mut output, model);
        self.render_overview(&mut output, model, &anchors);
        self.render_licenses(&mut output, model, &anchors);
        self.render_notices(&mut output, model);

        Ok(output)
    }
}
