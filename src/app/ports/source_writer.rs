/// Append-only line sink with indentation scopes.
pub trait SourceWriter {
    fn write(&mut self, line: &str) -> &mut Self;

    fn indent(&mut self) -> &mut Self;

    fn outdent(&mut self) -> &mut Self;

    fn write_if(&mut self, condition: bool, line: &str) -> &mut Self {
        if condition {
            self.write(line);
        }
        self
    }

    fn write_all<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write(line.as_ref());
        }
        self
    }
}
