// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::error::diagnostic::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render(&mut output, diagnostic, 0);
		output
	}

	fn render(output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{} = {}", indent, label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "{}help: {}", indent, help);
		}

		for note in &d.notes {
			let _ = writeln!(output, "{}note: {}", indent, note);
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "{}caused by:", indent);
			Self::render(output, cause, depth + 1);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::DefaultRenderer;
	use crate::error::diagnostic::{argument::missing_argument, cast::parse_failed};

	#[test]
	fn test_render_nested_cause() {
		let diagnostic = missing_argument("insert", "value").with_cause(parse_failed("int", "abc"));
		let out = DefaultRenderer::render_string(&diagnostic);

		assert!(out.starts_with("error[ARGUMENT_001]: insert requires `value`"));
		assert!(out.contains("caused by:\n  error[CAST_002]: cannot cast 'abc' to int"));
	}
}
