mod notice;
mod research_paper;
