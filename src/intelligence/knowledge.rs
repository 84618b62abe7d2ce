//! Regulatory knowledge base
//!
//! The retrieval half of the assistant: a static excerpt of the EU Energy
//! Efficiency Directive that every LLM prompt is grounded on.

/// Excerpt of the EU Energy Efficiency Directive (EED) 2023 recast
pub const REGULATORY_CONTEXT: &str = "\
REGULATION: EU Energy Efficiency Directive (EED) 2023 Recast.
SECTION 1: Energy Savings Obligation.
Member States must achieve cumulative end-use energy savings equivalent to new annual savings of at least 0.8% of final energy consumption.
SECTION 2: Public Sector.
Public bodies must renovate 3% of the total floor area of heated and/or cooled buildings owned and occupied by central government each year.
SECTION 3: Metering.
Final customers for electricity, natural gas, district heating, district cooling and domestic hot water should be provided with competitively priced individual meters that accurately reflect the final customer's actual energy consumption and that provide information on actual time of use.
";

/// Reply the model must give when the context has no answer
pub const NOT_IN_CONTEXT_REPLY: &str = "I cannot find this in the current regulatory database.";

/// Document name cited for LLM answers
pub const CONTEXT_DOCUMENT_NAME: &str = "EU EED Directive 2023";

/// Build the system prompt sent with every question
pub fn system_prompt() -> String {
    format!(
        "You are an Expert Compliance Officer for a major energy company.\n\
         You only answer questions based on the provided Regulatory Context.\n\
         \n\
         CONTEXT:\n\
         {context}\n\
         RULES:\n\
         1. If the answer is in the context, answer clearly and cite the section.\n\
         2. If the answer is NOT in the context, state: \"{fallback}\"\n\
         3. Do not hallucinate or use outside knowledge.\n",
        context = REGULATORY_CONTEXT,
        fallback = NOT_IN_CONTEXT_REPLY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_context_and_rules() {
        let prompt = system_prompt();
        assert!(prompt.contains("SECTION 2: Public Sector."));
        assert!(prompt.contains(NOT_IN_CONTEXT_REPLY));
        assert!(prompt.contains("Do not hallucinate"));
    }
}
