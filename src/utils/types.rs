/// Outcome of a single printed line in a report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    Warn,
    Info,
}

impl Status {
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Pass => "✅ ",
            Status::Fail => "❌ ",
            Status::Warn => "⚠️  ",
            Status::Info => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub status: Status,
    pub message: String,
}

/// A label that lands in either the passed or the failed list of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub label: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub findings: Vec<Finding>,
    pub verdicts: Vec<Verdict>,
}

impl Section {
    pub fn new(title: &'static str) -> Self {
        Section { title, findings: Vec::new(), verdicts: Vec::new() }
    }

    pub fn info(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(Status::Info, message)
    }

    pub fn pass(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(Status::Pass, message)
    }

    pub fn fail(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(Status::Fail, message)
    }

    pub fn warn(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(Status::Warn, message)
    }

    pub fn record(&mut self, label: &str, passed: bool) -> &mut Self {
        self.verdicts.push(Verdict { label: label.to_string(), passed });
        self
    }

    fn push(&mut self, status: Status, message: impl Into<String>) -> &mut Self {
        self.findings.push(Finding { status, message: message.into() });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEntry {
    pub hash: String,
    pub email: String,
    pub date: String,
}

#[cfg(test)]
impl Section {
    pub fn has(&self, status: Status) -> bool {
        self.findings.iter().any(|f| f.status == status)
    }
}
