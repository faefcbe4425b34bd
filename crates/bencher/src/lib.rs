#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, file: TestFile) -> Self {
        Self { name, group, file }
    }

    pub fn text_like(name: &'static str, file: TestFile) -> Self {
        Self::new(name, TestGroup::TextLike, file)
    }

    pub fn binary(name: &'static str, file: TestFile) -> Self {
        Self::new(name, TestGroup::Binary, file)
    }

    pub fn mixed(name: &'static str, file: TestFile) -> Self {
        Self::new(name, TestGroup::Mixed, file)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn file_name(&self) -> &'static str {
        self.file().file_name
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static [u8],
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static [u8]) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static [u8] {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

/// Shape of a payload, which decides how HexAscii splits it.
#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    /// Mostly printable ASCII, long escape runs
    TextLike,
    /// Uniformly random bytes, mostly hex pairs
    Binary,
    /// Alternating short runs of both
    Mixed,
}

pub static GET_SMALL: TestFile = TestFile::new("get_small.txt", include_bytes!("../resources/payload/get_small.txt"));
pub static RANDOM: TestFile = TestFile::new("random.bin", include_bytes!("../resources/payload/random.bin"));
pub static MIXED: TestFile = TestFile::new("mixed.bin", include_bytes!("../resources/payload/mixed.bin"));

pub fn create_test_cases() -> Vec<TestCase> {
    vec![TestCase::text_like("get_small", GET_SMALL), TestCase::binary("random", RANDOM), TestCase::mixed("mixed", MIXED)]
}
