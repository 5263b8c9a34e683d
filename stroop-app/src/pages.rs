/// Static research documentation, the landing page of the instrument.
const OVERVIEW: &str = "\
# Prompting Under Pressure: Research Overview

## Research Focus
This project investigates how cognitive load and stress affect user
interactions with Large Language Models (LLMs), particularly the length,
specificity, and quality of prompts.

## Research Questions
1. How does stress/cognitive load affect the quality of prompt formulation?
2. To what extent does it influence reliance on prompting strategies and
   perceived task success?
3. Are there measurable differences in LLM performance across baseline,
   stress, and overload conditions?
4. What design recommendations can support users under stress when prompting
   LLMs?

## Methodology
- Participants: 30+, aged 18-45, fluent in English, with prior LLM experience
- Data collection: surveys (demographics, anxiety levels), experimental tasks
  (baseline, cognitive load, acute stress), analysis of prompt history
  (length, specificity, strategy)

Run `stroop-app chat` for the baseline condition or `stroop-app stroop` for
the cognitive-load condition.";

pub fn print_overview() {
    println!("{OVERVIEW}");
}
