//! Fixed analysis prompt templates.

/// The two instruction templates a transcript can be embedded in. Picking one
/// is a configuration choice, not something derived from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    /// Generic AI/human/AI-assisted judgment.
    General,
    /// Cheating-detection judgment with a fixed integrity label set.
    Proctor,
}

impl PromptTemplate {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "general" => Some(Self::General),
            "proctor" => Some(Self::Proctor),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Proctor => "proctor",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::General => "AI vs human judgment: probability, label, reasoning, verdict",
            Self::Proctor => {
                "Interview-integrity judgment: Human (Clean) / AI-Assisted (Suspicious) / AI-Generated (Cheating)"
            }
        }
    }

    fn instructions(&self) -> &'static str {
        match self {
            Self::General => GENERAL_INSTRUCTIONS,
            Self::Proctor => PROCTOR_INSTRUCTIONS,
        }
    }
}

const GENERAL_INSTRUCTIONS: &str = "\
You are an expert in detecting AI-generated vs human-spoken text.

Analyze the following interview transcript and provide:
1. A probability score (0-100%) of being AI-generated.
2. Whether it seems Human, AI-generated, or AI-assisted.
3. Clear reasoning (linguistic, coherence, spontaneity, grammar cues, etc.).
4. A one-line summary verdict.";

const PROCTOR_INSTRUCTIONS: &str = "\
You are an expert in multimodal cheating detection for online interviews, inspired by research on anti-cheating
systems that use face detection, object tracking, and behavioral analysis.

Analyze the following interview transcript as if it were the \"audio\" component of a remote interview.
Your goal is to detect irregularities or external assistance analogous to cheating events in audio/video systems.

Evaluate and provide:

1. **AI-Assistance Probability (0-100%)** - likelihood that the candidate's responses were generated or guided by AI tools.
2. **Behavioral Integrity Classification** - label as one of:
   - \"Human (Clean)\"
   - \"AI-Assisted (Suspicious)\"
   - \"AI-Generated (Cheating)\"
3. **Evidence and reasoning** - consider linguistic, coherence, latency, spontaneity, tone consistency, and context alignment
   (comparable to visual cues like multiple faces, device presence, or candidate absence).
4. **Behavioral Metrics (optional)** - mention any indicators resembling:
   - *Another Person / Device*: multiple stylistic voices, abrupt changes in phrasing, unnatural vocabulary shifts.
   - *Absence*: loss of conversational continuity, blank or filler responses.
   - *Face/Voice Tracking Confidence*: coherence between question and answer.
5. **Final One-Line Verdict** - concise summary of your detection.";

/// Embed the transcript verbatim after the chosen template's instructions.
///
/// No escaping or truncation: the model receives exactly what the user
/// supplied.
pub fn build_analysis_prompt(template: PromptTemplate, transcript: &str) -> String {
    format!(
        "{}\n\nTranscript:\n{}",
        template.instructions(),
        transcript
    )
}
