use once_cell::sync::Lazy;
use types::CaseId;

#[derive(Debug)]
pub struct TestCase<'a> {
    pub name: &'a str,
    pub case: CaseId,
    pub expected_lines: Vec<&'a str>,
}

pub static TEST_CASES: Lazy<Vec<TestCase<'static>>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "hello-c",
            case: CaseId::Basic,
            expected_lines: vec![
                "Hello from C in Nanvix!",
                "Testing basic C operations...",
                "Sum: 10 + 20 = 30",
                "Counting from 1 to 5:",
                "Count: 1",
                "Count: 2",
                "Count: 3",
                "Count: 4",
                "Count: 5",
                "C execution completed!",
            ],
        },
        TestCase {
            name: "hello-cpp",
            case: CaseId::Extended,
            expected_lines: vec![
                "Hello from C++ in Nanvix!",
                "Testing C++ features...",
                "Calculator 'NanvixCalc' initialized!",
                "Addition: 15 + 25 = 40",
                "Multiplication: 3.14 * 2.0 = 6.28",
                "Numbers: 1 2 3 4 5 ",
                "C++ execution completed successfully!",
            ],
        },
    ]
});
