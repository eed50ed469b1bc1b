// All LLM prompt templates for the prep pipeline.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Resume context header for plain-text resumes. The resume follows verbatim.
pub const RESUME_CONTEXT_HEADER: &str = "\n\nCandidate's Current Resume:\n";

/// Resume context for PDF uploads. The PDF is never decoded, so the model only
/// gets this placeholder.
pub const PDF_RESUME_CONTEXT: &str =
    "\n\nCandidate's Current Resume (PDF content):\n[Resume will be analyzed from uploaded PDF]";

/// Company search context when search returned snippets. Replace `{company_name}`, `{snippets}`.
pub const SEARCH_CONTEXT_TEMPLATE: &str = "\n\nRecent web search results about {company_name}:\n{snippets}\n\nCombine these results with what you already know, and prefer them where they are more recent.";

/// Company search context when search was unavailable or empty.
pub const NO_SEARCH_CONTEXT: &str = "\n\nNo live search results are available. Rely on your existing knowledge of the company and say so where information may be out of date.";

/// Resume bullets prompt.
/// Replace: {job_description}, {company_name}, {resume_context}, {formatting}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are an expert resume coach who helps candidates tailor their resumes to a specific role.

TARGET COMPANY: {company_name}

JOB DESCRIPTION:
{job_description}{resume_context}

Write 6-8 resume bullet points that position the candidate for this role.

RULES:
1. Start every bullet with a strong action verb and put it in **bold**
2. Quantify impact wherever the resume supports it (percentages, counts, time saved)
3. Mirror the most important keywords from the job description naturally
4. If a resume was provided, rewrite the candidate's real experience; never invent employers, titles, or numbers
5. If no resume was provided, write template bullets with *[placeholders in italics]* for the candidate to fill in
6. Finish with a short **Keywords to include** line listing the 5-8 most important terms from the posting

{formatting}"#;

/// Interview prep prompt.
/// Replace: {job_description}, {company_name}, {resume_context}, {formatting}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"You are an experienced hiring manager at {company_name} preparing a candidate for an interview.

JOB DESCRIPTION:
{job_description}{resume_context}

Produce an interview prep guide with these sections, each introduced by a **bold** heading line:

**Behavioral Questions** - 4 questions
**Technical / Role-Specific Questions** - 4 questions drawn from the job requirements
**Company-Specific Questions** - 2 questions about motivation and fit with {company_name}

For every question give:
- the question itself in **bold**
- *What they're looking for:* one sentence
- *Suggested answer approach:* 2-3 sentences, using the STAR method for behavioral questions and the candidate's resume when one was provided

End with **Questions to Ask the Interviewer**: 3 thoughtful questions.

{formatting}"#;

/// Company research prompt.
/// Replace: {company_name}, {job_description}, {search_context}, {formatting}
pub const COMPANY_PROMPT_TEMPLATE: &str = r#"You are a career coach preparing a candidate to interview at {company_name}.

JOB DESCRIPTION (for context on the team and role):
{job_description}{search_context}

Write a concise company research brief with these sections, each introduced by a **bold** heading line:

**Company Overview** - what the company does, size, and market position
**Mission & Values** - stated mission and the values the candidate should echo
**Products & Services** - main offerings, highlighting those relevant to this role
**Recent News** - notable developments the candidate could mention
**Culture & Work Environment** - what working there is like
**Talking Points** - 3-4 ways to connect the candidate's background to the company's goals

Mark anything you are unsure about with *(verify before the interview)*.

{formatting}"#;

/// Max tokens for each of the three completion calls.
pub const RESUME_MAX_TOKENS: u32 = 1000;
pub const INTERVIEW_MAX_TOKENS: u32 = 1500;
pub const COMPANY_MAX_TOKENS: u32 = 1200;
