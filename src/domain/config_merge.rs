//! Planning for config file copy and line merge.
//!
//! Nothing here touches the filesystem or asks questions; the app layer feeds
//! in current file contents and decides whether to apply a plan.
//!
//! The line merge is append-only. It has no common ancestor and produces no
//! conflict markers: every template line absent from the target is appended.

/// Outcome of comparing a template with an existing copy target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPlan {
    /// Target is absent; write the template.
    Create,
    /// Target is byte-identical to the template.
    Unchanged,
    /// Target exists with different content; overwrite needs confirmation.
    Conflict,
}

pub fn plan_copy(template: &[u8], existing: Option<&[u8]>) -> CopyPlan {
    match existing {
        None => CopyPlan::Create,
        Some(current) if current == template => CopyPlan::Unchanged,
        Some(_) => CopyPlan::Conflict,
    }
}

/// Outcome of merging template lines into a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergePlan {
    /// Every template line is already present.
    Unchanged,
    /// Target is absent or has no lines; write `content` without asking.
    Create { content: String },
    /// Target exists; appending `missing` yields `content`.
    Append { missing: Vec<String>, content: String },
}

impl MergePlan {
    /// Lines the plan would add, for showing to the user.
    pub fn additions(&self) -> Vec<&str> {
        match self {
            MergePlan::Unchanged => Vec::new(),
            MergePlan::Create { content } => content.lines().collect(),
            MergePlan::Append { missing, .. } => missing.iter().map(String::as_str).collect(),
        }
    }
}

pub fn plan_merge(template: &str, existing: Option<&str>) -> MergePlan {
    let existing = existing.filter(|current| !current.split('\n').all(str::is_empty));
    match existing {
        None => {
            let lines: Vec<&str> = template.split('\n').collect();
            if lines.iter().all(|line| line.is_empty()) {
                return MergePlan::Unchanged;
            }
            MergePlan::Create { content: join_lines(&lines) }
        }
        Some(current) => {
            let missing = missing_lines(template, current);
            if missing.is_empty() {
                return MergePlan::Unchanged;
            }
            let content = merged_content(current, &missing);
            let missing = missing.into_iter().map(str::to_string).collect();
            MergePlan::Append { missing, content }
        }
    }
}

/// Template lines absent from `target`, in template order.
///
/// Membership is tested against the target's lines only, so a line repeated
/// in the template is reported once per occurrence. Empty lines never count
/// as missing.
pub fn missing_lines<'a>(template: &'a str, target: &str) -> Vec<&'a str> {
    let target_lines: Vec<&str> = target.split('\n').collect();
    template
        .split('\n')
        .filter(|line| !line.is_empty() && !target_lines.contains(line))
        .collect()
}

/// Target lines followed by `missing`, empty lines dropped, newline-terminated.
pub fn merged_content(target: &str, missing: &[&str]) -> String {
    let lines: Vec<&str> = target.split('\n').chain(missing.iter().copied()).collect();
    join_lines(&lines)
}

fn join_lines(lines: &[&str]) -> String {
    let mut content =
        lines.iter().filter(|line| !line.is_empty()).copied().collect::<Vec<_>>().join("\n");
    content.push('\n');
    content
}
