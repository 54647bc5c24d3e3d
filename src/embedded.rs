//! Documentation resources compiled into the binary.

/// Source path of the code-generation instruction document
pub const CODEGEN_INSTRUCTIONS_PATH: &str =
    "resources/user-data-functions/fabric-functions-codegen.md";

/// Code-generation instructions for Fabric User Data Functions.
///
/// Returned verbatim; unlike the sample catalog this never touches the
/// network.
pub fn codegen_instructions() -> &'static str {
    include_str!("../resources/user-data-functions/fabric-functions-codegen.md")
}
