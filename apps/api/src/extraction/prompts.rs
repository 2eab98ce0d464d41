// Prompt constants for the two extraction stages.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Vision prompt. Replace `{no_personal_data}`, `{page_width}` and `{page_height}` before sending.
/// Teaches the model the token and loop-marker vocabulary the merge engine understands.
pub const VISION_CLONE_PROMPT_TEMPLATE: &str = r#"You are a pixel-precise front-end engineer who specialises in Tailwind CSS.
Clone the resume in this image into HTML, strictly separating layout from content.

## Layout
- Produce a complete page container ({page_width}mm x {page_height}mm).
- Identify single-column, two-column or mixed layouts and rebuild them with flex or grid.
- Reproduce margins and paddings with concrete utilities (mb-4, py-6, gap-8).
- Keep the type hierarchy: headings text-2xl/text-xl, body text-sm/text-base.

## Visual style
- Sample exact colours as arbitrary values, e.g. text-[#2D3748], bg-[#4A5568].
- Detect serif vs sans-serif and use font-serif or font-sans.
- Draw contact icons (phone, email, location, LinkedIn) as inline SVG.
- Reproduce cards with shadow-md, rounded-lg and similar utilities.

## Placeholders (mandatory)
{no_personal_data}

Header:
- {{fullName}} - name
- {{title}} - job title
- {{email}}, {{phone}}, {{location}} - contact details
- {{linkedin}}, {{website}} - profile links (if present)
- {{summary}} - profile summary (if present)
- <img src="{{photo_src}}" class="..."> - photo (if present)

Skills:
- {{skill_tags}} - inside the skills container

## Repeat blocks (use this exact format)

Work experience:
<!-- START_EXPERIENCE_LOOP -->
<div class="mb-6">
  <div class="flex justify-between items-start">
    <div>
      <h3 class="font-bold text-[#2D3748]">{{exp_role}}</h3>
      <p class="text-[#4A5568]">{{exp_company}}</p>
    </div>
    <span class="text-sm text-[#718096]">{{exp_duration}}</span>
  </div>
  <div class="mt-2 text-sm text-[#4A5568]">
    {{exp_description}}
  </div>
</div>
<!-- END_EXPERIENCE_LOOP -->

Education:
<!-- START_EDUCATION_LOOP -->
<div class="mb-3">
  <h4 class="font-semibold">{{edu_school}}</h4>
  <p class="text-sm">{{edu_degree}}</p>
  <p class="text-sm text-gray-500">{{edu_year}}</p>
</div>
<!-- END_EDUCATION_LOOP -->

## Output
- Output raw HTML only, not wrapped in a code block.
- Start with <div class="w-[{page_width}mm] min-h-[{page_height}mm] ..."> and close every tag.
- Keep static section labels such as "Experience", "Education" and "Skills"."#;

/// Extraction prompt. Replace `{jd_text}`, `{resume_text}` and every `{limit_*}`
/// placeholder before sending.
pub const STRATEGIST_PROMPT_TEMPLATE: &str = r#"Rewrite the candidate's resume for the target role.

## Strategy
1. Analyse the job description: extract the core skills and keywords.
2. Keep only the experience relevant to the role (at most {limit_exp_count} entries).
3. Rewrite descriptions with the STAR method, highlighting results that match the job description.
4. Make sure the key technical terms of the job description appear in the resume.

## Strict length limits (characters)
| field | max |
|---|---|
| fullName | {limit_full_name} |
| title | {limit_title} |
| summary | {limit_summary} |
| each description line | {limit_exp_description} |
| each skill | {limit_skill_name} |
| company | {limit_exp_company} |
| role | {limit_exp_role} |
| school | {limit_edu_school} |
| degree | {limit_edu_degree} |

At most {limit_skill_count} skills and {limit_edu_count} education entries.

## Required fields
Infer from context when missing: fullName ("Candidate"), title (use the role in the job description),
email ("contact@example.com"), phone ("Contact via HR"), location ("TBD"), summary,
at least 1 experience entry, at least 3 skills, at least 1 education entry.

## Output schema
{
  "fullName": "",
  "title": "",
  "contact": {"email": "", "phone": "", "location": "", "linkedin": "", "website": ""},
  "photoUrl": "",
  "summary": "",
  "experience": [
    {"company": "", "role": "", "duration": "", "description": ["", ""]}
  ],
  "skills": [""],
  "education": [
    {"school": "", "degree": "", "year": ""}
  ]
}

## Language
Write in the language of the job description.

---
[Target job description]
{jd_text}

[Candidate resume]
{resume_text}
"#;
