// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only:
//   - No tensor code here (that's Layer 5)
//   - No HTTP or printing here (that's Layer 1)
//   - No direct file access (that's Layer 6)

// Tokenize → pad → infer → threshold
pub mod inference_service;
