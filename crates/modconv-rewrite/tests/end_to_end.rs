//! Whole conversions over small projects written to a temp dir

use modconv_core::ConverterConfig;
use modconv_rewrite::convert;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const WARNING: &str = "\
// WARNING: Detected unhandled non interesting includes.
// It is not suggested mix includes and imports from the compiler's
// perspective. Since it may introduce redeclarations within different
// translation units and the compiler is not able to handle such patterns
// efficiently.
//
// See https://clang.llvm.org/docs/StandardCPlusPlusModules.html#performance-tips
";

struct Project {
    _dir: TempDir,
    root: PathBuf,
}

impl Project {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        Self { _dir: dir, root }
    }

    fn write(&self, name: &str, content: &str) {
        let path = self.root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn write_bytes(&self, name: &str, content: &[u8]) {
        let path = self.root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn read_bytes(&self, name: &str) -> Vec<u8> {
        fs::read(self.root.join(name)).unwrap()
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root.join(name)).unwrap()
    }

    fn exists(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }

    fn config(&self, yaml: &str) -> ConverterConfig {
        self.write("config.yml", yaml);
        ConverterConfig::load(&self.root.join("config.yml")).unwrap()
    }
}

fn module_units_project(project: &Project) {
    project.write(
        "include/a.h",
        "// Top comment for a.h\n#pragma once\n#include \"b.h\"\n#include \"not_interested.h\"\n\
         #include \"third_party/third.h\"\n\nint a();\n",
    );
    project.write("include/b.h", "#pragma once\nint b();\n");
    project.write("include/not_interested.h", "#pragma once\n");
    project.write("include/third_party/third.h", "#pragma once\n");
    project.write(
        "srcs/use.cc",
        "#include \"b.h\"\n#include \"a.h\"\n#include \"not_interested.h\"\n\
         #include \"third_party/third.h\"\n\nint use() { return a() + b(); }\n",
    );
}

#[test]
fn test_rewrite_headers_to_module_units() {
    let project = Project::new();
    module_units_project(&project);
    let config = project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: a.cppm\n",
        "    headers: include/a.h\n",
        "    prefix_map_of_module_units_for_headers: include:module\n",
        "  - name: b\n",
        "    path: b.cppm\n",
        "    headers: include/b.h\n",
        "third_party_modules:\n",
        "  - name: third_party\n",
        "    headers: third_party/.*\n",
        "mode: rewrite-headers-to-module-units\n",
        "controlling_macro: USE_MODULES\n",
        "keep_traditional_abi: false\n",
        "is_std_module_available: true\n",
        "srcs_to_rewrite: srcs/*.cc\n",
        "default_compile_commands: -std=c++20 -Iinclude\n",
    ));

    let report = convert(&config).unwrap();
    assert_eq!(report.analysed, 3);
    assert_eq!(report.failed, 0);
    assert!(report.removed.is_empty());

    assert_eq!(
        project.read("module/a.cppm"),
        format!(
            "// Top comment for a.h\nmodule;\n{}#include \"not_interested.h\"\n\n\
             export module a.a;\nimport b;\nimport third_party;\n#define USE_MODULES\n\
             export {{\n#include \"include/a.h\"\n}}\n",
            WARNING
        )
    );
    assert_eq!(
        project.read("include/b.cppm"),
        "export module b.b;\n#define USE_MODULES\nexport {\n#include \"b.h\"\n}\n"
    );
    assert_eq!(project.read("a.cppm"), "export module a;\nexport import a.a;\n");
    assert_eq!(project.read("b.cppm"), "export module b;\nexport import b.b;\n");

    assert_eq!(
        project.read("srcs/use.cc"),
        format!(
            "{}#include \"not_interested.h\"\nimport b.b;\nimport a.a;\nimport third_party;\n\
             int use() {{ return a() + b(); }}\n",
            WARNING
        )
    );

    // Headers stay, with the includes hidden from module builds.
    assert_eq!(
        project.read("include/a.h"),
        "// Top comment for a.h\n#ifndef USE_MODULES\n#pragma once\n#include \"b.h\"\n\
         #include \"not_interested.h\"\n#include \"third_party/third.h\"\n\n\
         #endif // USE_MODULES\n\nint a();\n"
    );
    // Nothing to guard in b.h.
    assert_eq!(project.read("include/b.h"), "#pragma once\nint b();\n");
}

#[test]
fn test_module_implementation_units() {
    let project = Project::new();
    project.write("a.h", "#pragma once\nint a();\n");
    project.write("b.h", "#pragma once\nint b();\n");
    project.write("non-interesting.h", "#pragma once\n");
    project.write("third_party/t.h", "#pragma once\n");
    project.write(
        "b.cpp",
        "#include \"non-interesting.h\"\n#include \"a.h\"\n#include \"b.h\"\n\
         #include \"third_party/t.h\"\n\nint b() { return a(); }\n",
    );
    let config = project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: mod_a.cppm\n",
        "    headers: a.h\n",
        "  - name: b\n",
        "    path: mod_b.cppm\n",
        "    headers: b.h\n",
        "    srcs: b.cpp\n",
        "third_party_modules:\n",
        "  - name: third_party\n",
        "    headers: third_party/.*\n",
        "mode: rewrite-headers-to-module-units\n",
        "controlling_macro: USE_MODULES\n",
        "keep_traditional_abi: false\n",
        "is_std_module_available: true\n",
    ));

    convert(&config).unwrap();

    assert_eq!(
        project.read("b.cpp"),
        format!(
            "module;\n{}#include \"non-interesting.h\"\nmodule b;\nimport a;\nimport b.b;\n\
             import third_party;\nint b() {{ return a(); }}\n",
            WARNING
        )
    );
}

#[test]
fn test_keep_traditional_abi_wraps_module_sources() {
    let project = Project::new();
    project.write("a.h", "#pragma once\nint a();\n");
    project.write("a.cpp", "#include \"a.h\"\n\nint a() { return 1; }\n");
    let config = project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: mod_a.cppm\n",
        "    headers: a.h\n",
        "    srcs: a.cpp\n",
        "mode: rewrite-headers-to-module-units\n",
        "controlling_macro: USE_MODULES\n",
        "is_std_module_available: true\n",
    ));

    convert(&config).unwrap();

    assert_eq!(
        project.read("a.cpp"),
        "module a;\nimport a.a;\nextern \"C++\" {\nint a() { return 1; }\n} // extern \"C++\"\n"
    );
    assert_eq!(
        project.read("a.cppm"),
        "export module a.a;\n#define USE_MODULES\nexport extern \"C++\" {\n#include \"a.h\"\n}\n"
    );
}

#[test]
fn test_rewrite_headers_to_partitions() {
    let project = Project::new();
    project.write("a.h", "#pragma once\n#include \"c.h\"\nint a();\n");
    project.write("c.h", "#ifndef C_H\n#define C_H\nint c();\n#endif\n");
    let config = project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: mod_a.cppm\n",
        "    headers: \"*.h\"\n",
        "mode: rewrite-headers-to-partitions\n",
        "controlling_macro: USE_MODULES\n",
        "is_std_module_available: true\n",
    ));

    convert(&config).unwrap();

    assert_eq!(
        project.read("mod_a.cppm"),
        "export module a;\nexport import :a;\nexport import :c;\n"
    );
    assert_eq!(
        project.read("a.cppm"),
        "export module a:a;\nimport :c;\n#define USE_MODULES\nexport extern \"C++\" {\n#include \"a.h\"\n}\n"
    );
    assert_eq!(
        project.read("c.cppm"),
        "export module a:c;\n#define USE_MODULES\nexport extern \"C++\" {\n#include \"c.h\"\n}\n"
    );
}

#[test]
fn test_moving_header_bodies() {
    let project = Project::new();
    project.write(
        "include/a.h",
        "#ifndef A_H\n#define A_H\n#include \"b.h\"\n\nint a();\n#endif // A_H\n",
    );
    project.write("include/b.h", "#ifndef B_H\n#define B_H\nint b();\n#endif\n");
    project.write("outside.cc", "#include \"b.h\"\n");
    let cdb = format!(
        "[{{\"directory\": \"{0}\", \"arguments\": [\"clang++\", \"-Iinclude\", \"outside.cc\"], \"file\": \"outside.cc\"}}]",
        project.root.display()
    );
    project.write("compile_commands.json", &cdb);
    let config = project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: mod_a.cppm\n",
        "    headers: include/a.h\n",
        "  - name: b\n",
        "    path: mod_b.cppm\n",
        "    headers: include/b.h\n",
        "mode: rewrite-headers-to-module-units\n",
        "controlling_macro: USE_MODULES\n",
        "remain_headers: false\n",
        "keep_traditional_abi: false\n",
        "is_std_module_available: true\n",
        "compilation_database: compile_commands.json\n",
        "default_compile_commands: -Iinclude\n",
    ));

    let report = convert(&config).unwrap();

    assert_eq!(
        project.read("include/a.cppm"),
        "export module a.a;\nimport b;\nexport {\nint a();\n}\n"
    );
    assert_eq!(
        project.read("include/b.cppm"),
        "export module b.b;\nexport {\nint b();\n}\n"
    );

    // b.h is still used by a file outside the conversion.
    assert!(!project.exists("include/a.h"));
    assert!(project.exists("include/b.h"));
    assert_eq!(report.removed, vec![project.root.join("include/a.h")]);
}

fn header_wrapper_project(project: &Project) -> ConverterConfig {
    project.write("a.h", "// a.h\n#pragma once\n#include \"b.h\"\n\nint a = VALUE;\n");
    project.write("b.h", "#pragma once\n#define VALUE 42\n");
    project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: a.cppm\n",
        "    headers: a.h\n",
        "  - name: b\n",
        "    path: b.cppm\n",
        "    headers: b.h\n",
        "mode: header-wrapper\n",
        "controlling_macro: USE_MODULES\n",
        "is_std_module_available: true\n",
        "srcs_to_rewrite: \"*.cpp\"\n",
    ))
}

#[test]
fn test_header_wrapper_with_macro_warnings() {
    let project = Project::new();
    let config = header_wrapper_project(&project);
    project.write("a.cpp", "#include \"a.h\"\n\nint main() { return a + VALUE; }\n");

    convert(&config).unwrap();

    let warning = format!(
        "// There unhandled macro uses found in the body:\n//\t'VALUE' defined in {}:",
        project.root.join("b.h").display()
    );
    let a_cppm = project.read("a.cppm");
    assert!(a_cppm.starts_with(&warning), "{}", a_cppm);
    assert!(a_cppm.ends_with(
        "\nexport module a;\nimport b;\n#define USE_MODULES\nexport extern \"C++\" {\n  #include \"a.h\"\n}\n"
    ));
    assert_eq!(
        project.read("b.cppm"),
        "export module b;\n#define USE_MODULES\nexport extern \"C++\" {\n  #include \"b.h\"\n}\n"
    );

    let a_cpp = project.read("a.cpp");
    assert!(a_cpp.starts_with(&warning), "{}", a_cpp);
    assert!(a_cpp.ends_with("\nimport a;\nint main() { return a + VALUE; }\n"));

    assert_eq!(
        project.read("a.h"),
        "// a.h\n#ifndef USE_MODULES\n#pragma once\n#include \"b.h\"\n\n#endif // USE_MODULES\n\nint a = VALUE;\n"
    );
}

#[test]
fn test_header_wrapper_is_idempotent() {
    let project = Project::new();
    let config = header_wrapper_project(&project);

    convert(&config).unwrap();
    let header = project.read("a.h");
    let wrapper = project.read("a.cppm");

    let report = convert(&config).unwrap();
    assert!(report.rewritten.is_empty());
    assert_eq!(project.read("a.h"), header);
    assert_eq!(project.read("a.cppm"), wrapper);
}

fn literal_scenario(project: &Project, b_is_a_module: bool) -> ConverterConfig {
    project.write("a.h", "#include \"b.h\"\nint a;\n");
    project.write("b.h", "#pragma once\n");
    let b_module = if b_is_a_module {
        "  - name: b\n    path: b.cppm\n    headers: b.h\n"
    } else {
        ""
    };
    project.config(&format!(
        "modules:\n  - name: a\n    path: a.cppm\n    headers: a.h\n{}\
         mode: header-wrapper\ncontrolling_macro: USE_MODULES\nis_std_module_available: true\n",
        b_module
    ))
}

#[test]
fn test_header_outside_modules_is_not_imported() {
    let project = Project::new();
    let config = literal_scenario(&project, false);

    convert(&config).unwrap();

    assert_eq!(
        project.read("a.h"),
        "#ifndef USE_MODULES\n#include \"b.h\"\n#endif // USE_MODULES\n\nint a;\n"
    );
    assert_eq!(
        project.read("a.cppm"),
        format!(
            "module;\n{}#include \"b.h\"\n\nexport module a;\n#define USE_MODULES\n\
             export extern \"C++\" {{\n  #include \"a.h\"\n}}\n",
            WARNING
        )
    );
    assert!(!project.read("a.cppm").contains("\nimport "));
}

#[test]
fn test_header_in_other_module_is_imported() {
    let project = Project::new();
    let config = literal_scenario(&project, true);

    convert(&config).unwrap();

    assert_eq!(
        project.read("a.cppm"),
        "export module a;\nimport b;\n#define USE_MODULES\nexport extern \"C++\" {\n  #include \"a.h\"\n}\n"
    );
    assert_eq!(
        project.read("b.cppm"),
        "export module b;\n#define USE_MODULES\nexport extern \"C++\" {\n  #include \"b.h\"\n}\n"
    );
    // Nothing to guard in a header without includes.
    assert_eq!(project.read("b.h"), "#pragma once\n");
}

#[test]
fn test_header_wrapper_includes_dependencies_first() {
    let project = Project::new();
    project.write("include/a_top.h", "#pragma once\n#include \"m_mid.h\"\nint top;\n");
    project.write("include/m_mid.h", "#pragma once\n#include \"z_leaf.h\"\nint mid;\n");
    project.write("include/z_leaf.h", "#pragma once\n#include <cstddef>\nint leaf;\n");
    let config = project.config(concat!(
        "modules:\n",
        "  - name: m\n",
        "    path: m.cppm\n",
        "    headers: include/**/*.h\n",
        "mode: header-wrapper\n",
        "controlling_macro: USE_MODULES\n",
        "is_std_module_available: true\n",
    ));

    convert(&config).unwrap();

    assert_eq!(
        project.read("m.cppm"),
        "export module m;\nimport std;\n#define USE_MODULES\nexport extern \"C++\" {\n  \
         #include \"include/z_leaf.h\"\n  #include \"include/m_mid.h\"\n  #include \"include/a_top.h\"\n}\n"
    );
    assert!(!project.exists("std.cppm"));
}

#[test]
fn test_std_module_generation() {
    let project = Project::new();
    project.write("use.cc", "#include <vector>\n#include <new_std_header>\n\nint x;\n");
    let config = project.config(concat!(
        "third_party_modules:\n",
        "  - name: std\n",
        "    headers: new_std_header\n",
        "mode: header-wrapper\n",
        "controlling_macro: USE_MODULES\n",
        "is_std_module_available: false\n",
        "srcs_to_rewrite: use.cc\n",
    ));

    convert(&config).unwrap();

    assert_eq!(project.read("use.cc"), "import std;\nint x;\n");
    let std_module = project.read("std.cppm");
    assert!(std_module.contains("#include <vector>\n#include <new_std_header>\n"));
    assert!(std_module.contains("using std::vector;"));
}

#[test]
fn test_std_module_exports_used_headers() {
    let project = Project::new();
    project.write(
        "use.cc",
        "#include <memory>\n#include <algorithm>\n#include <cstdint>\n\nint x;\n",
    );
    let config = project.config(concat!(
        "mode: header-wrapper\n",
        "controlling_macro: USE_MODULES\n",
        "is_std_module_available: false\n",
        "srcs_to_rewrite: use.cc\n",
    ));

    convert(&config).unwrap();

    let std_module = project.read("std.cppm");
    assert!(std_module.contains("module;\n#include <algorithm>\n#include <cstdint>\n#include <memory>\n"));
    assert!(std_module.contains("using std::unique_ptr;"));
    assert!(std_module.contains("using std::sort;"));
    assert!(std_module.contains("using std::uint32_t;"));
    assert!(!std_module.contains("using std::vector;"));
}

#[test]
fn test_invalid_third_party_regex_is_fatal() {
    let project = Project::new();
    project.write("a.h", "#pragma once\n#include \"b.h\"\n");
    let config = project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: mod_a.cppm\n",
        "    headers: a.h\n",
        "third_party_modules:\n",
        "  - name: broken\n",
        "    headers: \"a(\"\n",
        "mode: rewrite-headers-to-module-units\n",
        "controlling_macro: USE_MODULES\n",
        "is_std_module_available: true\n",
    ));

    assert!(convert(&config).is_err());
    assert!(!project.exists("a.cppm"));
    assert!(project.exists("a.h"));
}

fn wrapper_pair(project: &Project, a_h: &[u8]) -> ConverterConfig {
    project.write_bytes("a.h", a_h);
    project.write("b.h", "#pragma once\n");
    project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: a.cppm\n",
        "    headers: a.h\n",
        "  - name: b\n",
        "    path: b.cppm\n",
        "    headers: b.h\n",
        "mode: header-wrapper\n",
        "controlling_macro: USE_MODULES\n",
        "is_std_module_available: true\n",
        "srcs_to_rewrite: \"*.cpp\"\n",
    ))
}

fn module_unit_pair(project: &Project, a_h: &[u8], a_cpp: &[u8]) -> ConverterConfig {
    project.write_bytes("a.h", a_h);
    project.write_bytes("a.cpp", a_cpp);
    project.write("b.h", "#pragma once\nint b();\n");
    project.config(concat!(
        "modules:\n",
        "  - name: a\n",
        "    path: mod_a.cppm\n",
        "    headers: a.h\n",
        "    srcs: a.cpp\n",
        "  - name: b\n",
        "    path: mod_b.cppm\n",
        "    headers: b.h\n",
        "mode: rewrite-headers-to-module-units\n",
        "controlling_macro: USE_MODULES\n",
        "remain_headers: false\n",
        "keep_traditional_abi: false\n",
        "is_std_module_available: true\n",
    ))
}

#[test]
fn test_header_wrapper_keeps_invalid_utf8() {
    let project = Project::new();
    let config = wrapper_pair(&project, b"#include \"b.h\"\n// caf\xE9 latin-1 comment\nint a;\n");
    project.write_bytes("a.cpp", b"#include \"a.h\"\n\nconst char* s = \"\xE9\";\n");

    convert(&config).unwrap();

    assert_eq!(
        project.read_bytes("a.h"),
        b"#ifndef USE_MODULES\n#include \"b.h\"\n#endif // USE_MODULES\n\n\
          // caf\xE9 latin-1 comment\nint a;\n"
            .to_vec()
    );
    assert_eq!(
        project.read_bytes("a.cpp"),
        b"import a;\nconst char* s = \"\xE9\";\n".to_vec()
    );
}

#[test]
fn test_header_wrapper_keeps_multibyte_text() {
    let project = Project::new();
    let config = wrapper_pair(&project, "#include \"b.h\"\n// größe ✓\nint a;\n".as_bytes());
    project.write("a.cpp", "#include \"a.h\"\n\nconst char* s = \"größe\";\n");

    convert(&config).unwrap();

    assert_eq!(
        project.read("a.h"),
        "#ifndef USE_MODULES\n#include \"b.h\"\n#endif // USE_MODULES\n\n// größe ✓\nint a;\n"
    );
    assert_eq!(project.read("a.cpp"), "import a;\nconst char* s = \"größe\";\n");
}

#[test]
fn test_header_wrapper_keeps_crlf() {
    let project = Project::new();
    let config = wrapper_pair(
        &project,
        b"#ifndef A_H\r\n#define A_H\r\n#include \"b.h\"\r\n\r\nint a;\r\n#endif\r\n",
    );

    convert(&config).unwrap();

    assert_eq!(
        project.read("a.h"),
        "#ifndef A_H\r\n#define A_H\r\n#ifndef USE_MODULES\r\n#include \"b.h\"\r\n\r\n\
         #endif // USE_MODULES\r\n\r\nint a;\r\n#endif\r\n"
    );
}

#[test]
fn test_header_wrapper_skips_byte_order_mark() {
    let project = Project::new();
    let config = wrapper_pair(&project, "\u{feff}#include \"b.h\"\nint a;\n".as_bytes());

    convert(&config).unwrap();

    assert_eq!(
        project.read("a.h"),
        "\u{feff}#ifndef USE_MODULES\n#include \"b.h\"\n#endif // USE_MODULES\n\nint a;\n"
    );
    assert_eq!(
        project.read("a.cppm"),
        "export module a;\nimport b;\n#define USE_MODULES\nexport extern \"C++\" {\n  #include \"a.h\"\n}\n"
    );
}

#[test]
fn test_module_units_keep_invalid_utf8() {
    let project = Project::new();
    let config = module_unit_pair(
        &project,
        b"#ifndef A_H\n#define A_H\n#include \"b.h\"\n\n// \xE9t\xE9\nint a();\n#endif // A_H\n",
        b"#include \"a.h\"\n\nconst char* s = \"\xE9\";\nint a() { return 1; }\n",
    );

    convert(&config).unwrap();

    assert_eq!(
        project.read_bytes("a.cppm"),
        b"export module a.a;\nimport b;\nexport {\n// \xE9t\xE9\nint a();\n}\n".to_vec()
    );
    assert_eq!(
        project.read_bytes("a.cpp"),
        b"module a;\nimport a.a;\nconst char* s = \"\xE9\";\nint a() { return 1; }\n".to_vec()
    );
    assert!(!project.exists("a.h"));
}

#[test]
fn test_module_units_keep_multibyte_text() {
    let project = Project::new();
    let config = module_unit_pair(
        &project,
        "#pragma once\n#include \"b.h\"\n// größe ✓\nint a();\n".as_bytes(),
        "#include \"a.h\"\n\nconst char* s = \"größe\";\n".as_bytes(),
    );

    convert(&config).unwrap();

    assert_eq!(
        project.read("a.cppm"),
        "export module a.a;\nimport b;\nexport {\n// größe ✓\nint a();\n}\n"
    );
    assert_eq!(project.read("a.cpp"), "module a;\nimport a.a;\nconst char* s = \"größe\";\n");
}

#[test]
fn test_module_units_keep_crlf() {
    let project = Project::new();
    let config = module_unit_pair(
        &project,
        b"#ifndef A_H\r\n#define A_H\r\n#include \"b.h\"\r\n\r\nint a();\r\n#endif\r\n",
        b"#include \"a.h\"\r\n\r\nint a() { return 1; }\r\n",
    );

    convert(&config).unwrap();

    assert_eq!(
        project.read("a.cppm"),
        "export module a.a;\r\nimport b;\r\nexport {\r\nint a();\r\n}\r\n"
    );
    assert_eq!(
        project.read("a.cpp"),
        "module a;\r\nimport a.a;\r\nint a() { return 1; }\r\n"
    );
}
