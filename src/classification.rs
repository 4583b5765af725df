use crate::{context::Context, ir::SourceFile, warning};

/// Result of mapping a source file onto a tool-specific form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification<T> {
    Accepted(T),
    Ignored,
    Unknown,
}

/// Classifies files in order, warning about files of unknown types.
pub async fn classify_files<'a, T>(
    context: &Context,
    files: impl IntoIterator<Item = &'a SourceFile>,
    classify: impl Fn(&'a SourceFile) -> Classification<T>,
) -> Vec<T> {
    let mut accepted = vec![];

    for file in files {
        match classify(file) {
            Classification::Accepted(value) => accepted.push(value),
            Classification::Ignored => {}
            Classification::Unknown => {
                warning!(
                    context,
                    "{} has unknown file type '{}'",
                    file.name(),
                    file.file_type()
                );
            }
        }
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        infrastructure::{FakeCommandRunner, FakeConsole, FakeFileSystem},
        options::Options,
    };
    use pretty_assertions::assert_eq;

    fn classify(file: &SourceFile) -> Classification<&str> {
        match file.file_type() {
            "verilogSource" => Classification::Accepted(file.name()),
            "user" => Classification::Ignored,
            _ => Classification::Unknown,
        }
    }

    #[tokio::test]
    async fn keep_accepted_files_in_order() {
        let console = FakeConsole::new();
        let context = Context::new(
            FakeCommandRunner::new(),
            console.clone(),
            FakeFileSystem::new(),
            Options::default(),
        );
        let files = [
            SourceFile::new("b.v", "verilogSource", None),
            SourceFile::new("notes.txt", "user", None),
            SourceFile::new("a.v", "verilogSource", None),
        ];

        assert_eq!(
            classify_files(&context, &files, classify).await,
            ["b.v", "a.v"]
        );
        assert_eq!(console.lines(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn warn_about_unknown_file_type() {
        let console = FakeConsole::new();
        let context = Context::new(
            FakeCommandRunner::new(),
            console.clone(),
            FakeFileSystem::new(),
            Options::default(),
        );
        let files = [SourceFile::new("top.xci", "xci", None)];

        assert_eq!(
            classify_files(&context, &files, classify).await,
            Vec::<&str>::new()
        );
        assert_eq!(
            console.lines(),
            ["edagen: warning: top.xci has unknown file type 'xci'"]
        );
    }
}
