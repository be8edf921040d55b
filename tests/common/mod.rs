use lispy::value::Value;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

/// Evaluates each line of |s| as a separate program.
pub fn results<S: AsRef<str>>(s: S) -> Vec<Value> {
    setup();
    s.as_ref()
        .lines()
        .map(|line| lispy::eval_str("<test>", line.trim()).unwrap())
        .collect::<Vec<_>>()
}

pub fn rendered<S: AsRef<str>>(s: S) -> Vec<String> {
    results(s).iter().map(|value| value.to_string()).collect()
}
