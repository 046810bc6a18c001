//! Integration tests for console-params-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use console_params_core::{
    config::get_modules_path,
    console_args::has_param,
    file_handling::get_module_definitions,
    parameter_string::{parse_parameter_string, ParameterMap, MALFORMED_PARAMETERS_WARNING},
};
use std::collections::VecDeque;
use std::io::Write;
use tempfile::NamedTempFile;

fn load_modules(yaml_content: &str) -> Vec<console_params_core::module_definitions::ModuleDefinition> {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    get_module_definitions(&get_modules_path(Some(&temp_path))).unwrap()
}

/// Test binding a parameter string to the inputs of a module loaded from disk
#[test]
fn test_module_inputs_as_name_source() {
    let modules = load_modules(
        r#"
- id: "threshold"
  description: "Apply a global threshold"
  inputs:
    - name: "method"
    - name: "radius"
    - name: "dark"
- id: "blur"
  inputs:
    - name: "sigma"
"#,
    );
    assert_eq!(modules.len(), 2);

    let threshold = &modules[0];
    let mut warnings = Vec::new();
    let parameters = parse_parameter_string(
        "otsu,dark=true,5",
        Some(threshold.input_names()),
        Some(|message: &str| warnings.push(message.to_string())),
    );

    let expected: ParameterMap = [("method", "otsu"), ("dark", "true"), ("radius", "5")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(parameters, expected);
    assert!(warnings.is_empty());

    // Only one input, so the second bare value has nowhere to go
    let blur = &modules[1];
    let parameters = parse_parameter_string(
        "2.0,3.0",
        Some(blur.input_names()),
        Some(|message: &str| warnings.push(message.to_string())),
    );
    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters["sigma"], "2.0");
    assert_eq!(warnings, vec![MALFORMED_PARAMETERS_WARNING.to_string()]);
}

/// Test consuming a console token queue the way a console argument handler would
#[test]
fn test_console_queue_workflow() {
    let mut remaining: VecDeque<String> = ["--params", "a=1,b=2", "--flag"]
        .into_iter()
        .map(String::from)
        .collect();

    let flag = remaining.pop_front().unwrap();
    assert_eq!(flag, "--params");
    assert!(has_param(&remaining));

    let raw = remaining.pop_front().unwrap();
    let parameters = parse_parameter_string(&raw, None::<Vec<String>>, None::<fn(&str)>);
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters["a"], "1");
    assert_eq!(parameters["b"], "2");

    // Next token is a flag, so it is not a value
    assert!(!has_param(&remaining));
    remaining.pop_front();
    assert!(!has_param(&remaining));
}

/// Test that module definitions without inputs still work as an (empty) name source
#[test]
fn test_module_without_inputs() {
    let modules = load_modules("- id: \"noop\"\n");

    let mut warning_count = 0;
    let parameters = parse_parameter_string(
        "value,key=value",
        Some(modules[0].input_names()),
        Some(|_: &str| warning_count += 1),
    );

    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters["key"], "value");
    assert_eq!(warning_count, 1);
}
