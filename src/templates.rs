//! Build-manifest templates and starter sources for `cxf new` / `cxf app`.
//!
//! The three CMake templates carry fixed `{{PLACEHOLDER}}` tokens that the
//! renderer substitutes textually:
//!
//! - root: `{{PROJ_NAME}}`, `{{EXTERNAL_DEPENDENCIES}}`, `{{APP_INCLUSIONS}}`
//! - core: `{{SRC_FILES}}`, `{{LIBRARIES}}`
//! - app: `{{SRC_FILES}}`, `{{APP_NAME}}`

/// Top-level `CMakeLists.txt` template.
pub const CMAKELISTS_ROOT: &str = r#"
# CMakeList.txt : Top-level CMake project file, do global configuration
# and include sub-projects here.
#
cmake_minimum_required (VERSION 3.12)

set(CMAKE_CXX_STANDARD 20)
set(CMAKE_CXX_STANDARD_REQUIRED YES)

# Create project
project({{PROJ_NAME}} VERSION 0.1.0 LANGUAGES C CXX)

include(FetchContent)

{{EXTERNAL_DEPENDENCIES}}

# Add subdirectories
add_subdirectory(core)
{{APP_INCLUSIONS}}
"#;

/// Shared-library `core/CMakeLists.txt` template.
pub const CMAKELISTS_CORE: &str = r#"
# core/CMakeLists.txt
add_library(core
{{SRC_FILES}}
)

target_include_directories(core
    PUBLIC
        ${CMAKE_CURRENT_SOURCE_DIR}/include
)

{{LIBRARIES}}

set_property(TARGET core PROPERTY CXX_STANDARD 20)
"#;

/// Per-app `apps/<name>/CMakeLists.txt` template.
pub const CMAKELISTS_APP: &str = r#"
# CMakeList.txt : CMake project for cmake_app, include source and define
# project specific logic here.
#
include(CTest)
enable_testing()

# Add source to this project's executable.
set(SRC_FILES_APP
{{SRC_FILES}}
    )

add_executable ({{APP_NAME}} ${SRC_FILES_APP})
target_include_directories({{APP_NAME}} PRIVATE ${CMAKE_CURRENT_SOURCE_DIR}/include)
target_link_libraries({{APP_NAME}} PRIVATE core)

set(CPACK_PROJECT_NAME ${PROJECT_NAME})
set(CPACK_PROJECT_VERSION ${PROJECT_VERSION})
include(CPack)
"#;

/// User-editable side file where external dependency wiring lives. Written
/// once by `cxf new`, read verbatim into the core manifest on every render.
pub const CORE_PACKAGES_STUB: &str = r#"# Add the needed external dependencies here.

# FetchContent_Declare(
#     fmt
#     GIT_REPOSITORY https://github.com/fmtlib/fmt.git
#     GIT_TAG        9.1.0
# )
# FetchContent_MakeAvailable(fmt)
# target_link_libraries(core PUBLIC fmt::fmt)


# FetchContent_Declare(
#     nlohmann_json
#     GIT_REPOSITORY https://github.com/nlohmann/json.git
#     GIT_TAG        v3.11.3
# )
# FetchContent_MakeAvailable(nlohmann_json)
# target_link_libraries(core PUBLIC nlohmann_json::nlohmann_json)


#find_package(Boost 1.83 REQUIRED)
#target_include_directories(core PRIVATE ${Boost_INCLUDE_DIRS})

"#;

/// Starter `main.cpp` for a freshly scaffolded app.
pub const APP_MAIN_CPP: &str = r#"
#include <iostream>
#include <string>
#include <filesystem>

#include "subdir/class.hpp"

using std::cin;
using std::cout;
using std::string;
namespace fs = std::filesystem;

int main(){
    std::cout << "Hello World!\n";
    return 0;
}
"#;

pub const APP_CLASS_CPP: &str = r#"
#include "subdir/class.hpp"
"#;

pub const APP_CLASS_HPP: &str = r#"
#pragma once
"#;

/// Starter class pair for the shared core library.
pub const CORE_CLASS_HPP: &str = r#"
#pragma once

namespace core
{
    class MyClass
    {
    public:
        void say_hello();
    };
}
"#;

pub const CORE_CLASS_CPP: &str = r#"
#include "core/class.hpp"
#include <iostream>

void core::MyClass::say_hello() {
    std::cout << "Hello from core!\n";
}
"#;

/// Wrapper script passed to CMake as `CMAKE_CXX_CLANG_TIDY` so every
/// translation unit is checked during the build.
pub const CLANG_TIDY_WRAPPER: &str = r#"#!/bin/bash
CHECKS='-checks=bugprone-*,performance-*,modernize-*'
exec clang-tidy $CHECKS "$@"
"#;

pub const GITIGNORE: &str = "build/\n.vscode/\n";
