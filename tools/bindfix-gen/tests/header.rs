// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use bindfix::fixtures;
use bindfix_gen::codegen::emit_header;
use bindfix_gen::{GenConfig, Guard};

fn fixture_header(config: &GenConfig) -> String {
    let registry = fixtures::registry().expect("registry");
    emit_header(&registry, config).expect("header")
}

/// Body of `struct <name> { ... };`, including the closing line.
fn struct_block<'a>(header: &'a str, name: &str) -> &'a str {
    let open = format!("struct {name} {{\n");
    let start = header
        .find(&open)
        .unwrap_or_else(|| panic!("struct {name} missing"));
    let len = header[start..].find("\n};\n").expect("struct end") + 4;
    &header[start..start + len]
}

#[test]
fn test_config_initializers() {
    let header = fixture_header(&GenConfig::default());
    assert_eq!(
        struct_block(&header, "Config"),
        "struct Config {\n    int id = 42;\n    float value = 56.0f;\n    std::string name = \"test\";\n};\n"
    );
}

#[test]
fn test_default_nested_struct_has_no_initializer() {
    let header = fixture_header(&GenConfig::default());
    assert_eq!(
        struct_block(&header, "Manager"),
        "struct Manager {\n    Config config;\n};\n"
    );

    let school = struct_block(&header, "School");
    assert!(school.contains("    Manager teacher;\n"));
    assert!(school.contains("    Manager student;\n"));
    assert!(school.contains("    std::unique_ptr<Manager> other = std::make_unique<Manager>();\n"));
}

#[test]
fn test_methods_readonly_and_declarations() {
    let header = fixture_header(&GenConfig::default());
    let expected = "\
struct Methods {
private:
    int id = 0;
    Config config;

public:
    int get_id() const;
    void set_id(int v);
    const Config& get_config() const;
    void set_config(const Config& c);
    void set_config_by_value(Config c);
    static int add(int v, int w);
    Config create_config() const;
    std::optional<int> optional_id(bool flag) const;
};
";
    assert_eq!(struct_block(&header, "Methods"), expected);
}

#[test]
fn test_containers_iterate() {
    let header = fixture_header(&GenConfig::default());
    let ints = struct_block(&header, "IntContainer");
    assert!(ints.contains("    std::vector<int> data = {10, 20, 30};\n"));
    assert!(ints.contains(
        "    std::vector<int>::const_iterator begin() const { return data.begin(); }\n"
    ));
    assert!(ints.contains("    std::vector<int>::const_iterator end() const { return data.end(); }\n"));
    assert!(ints.contains("    std::vector<int>::iterator begin() { return data.begin(); }\n"));

    let configs = struct_block(&header, "ConfigContainer");
    assert!(configs.contains(
        "    std::vector<Config> data = {Config{100, 56.0f, \"test\"}, Config{200, 56.0f, \"test\"}};\n"
    ));
    assert!(configs.contains("    std::vector<std::string> names = {\"100\", \"200\"};\n"));
    assert!(configs.contains("std::vector<Config>::const_iterator begin() const"));
}

#[test]
fn test_optionals() {
    let header = fixture_header(&GenConfig::default());
    let chance = struct_block(&header, "Chance");
    assert!(chance.contains("    std::optional<int> probability = 75;\n"));
    assert!(chance.contains("    void set_chance(bool has_chance, int value);\n"));

    let wallet = struct_block(&header, "Wallet");
    assert!(wallet.contains("    std::optional<Config> config;\n"));
    assert!(wallet.contains("    void set_config(bool has_config, const Config& c);\n"));
}

#[test]
fn test_maps() {
    let header = fixture_header(&GenConfig::default());
    let maps = struct_block(&header, "MapExample");
    assert!(maps.contains(
        "    std::unordered_map<int, std::string> int_str_map = {{1, \"one\"}, {2, \"two\"}};\n"
    ));
    assert!(maps.contains(
        "    std::unordered_map<int, Config> int_config_map = {{10, Config{10, 56.0f, \"test\"}}, {20, Config{20, 56.0f, \"test\"}}};\n"
    ));
    assert!(maps.contains(
        "    std::unordered_map<std::string, Config> str_config_map = {{\"one\", Config{30, 56.0f, \"test\"}}};\n"
    ));
}

#[test]
fn test_types_in_registry_order() {
    let header = fixture_header(&GenConfig::default());
    let positions: Vec<usize> = [
        "Config", "Manager", "School", "Methods", "IntContainer", "ConfigContainer", "Chance",
        "Wallet", "MapExample",
    ]
    .iter()
    .map(|name| header.find(&format!("struct {name} {{")).expect(name))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_pragma_guard_and_std_includes() {
    let header = fixture_header(&GenConfig::default());
    assert!(header.starts_with("// Generated by bindfix-gen"));
    assert!(header.contains("#pragma once\n"));
    assert!(!header.contains("#ifndef"));
    for include in ["<cstdint>", "<memory>", "<optional>", "<string>", "<unordered_map>", "<vector>"] {
        assert!(header.contains(&format!("#include {include}\n")), "{include}");
    }
    assert!(!header.contains("namespace"));
}

#[test]
fn test_ifndef_guard_namespace_and_extra_includes() {
    let config = GenConfig {
        namespace: Some("acme::fixtures".to_string()),
        guard: Guard::Ifndef,
        includes: vec!["\"extra.h\"".to_string()],
        ..Default::default()
    };
    let header = fixture_header(&config);
    assert!(header.contains("#ifndef BINDFIX_FIXTURES_HPP\n#define BINDFIX_FIXTURES_HPP\n"));
    assert!(header.trim_end().ends_with("#endif  // BINDFIX_FIXTURES_HPP"));
    assert!(!header.contains("#pragma once"));
    assert!(header.contains("#include \"extra.h\"\n"));

    let open = header.find("namespace acme::fixtures {\n").expect("namespace open");
    let close = header.find("}  // namespace acme::fixtures\n").expect("namespace close");
    let config_struct = header.find("struct Config {").expect("Config");
    assert!(open < config_struct && config_struct < close);
}
