// Small Gutenberg-style book with known answers for every query

/// Front matter, three chapters, end marker and license text
pub const SAMPLE_BOOK: &str = "The Project Gutenberg EBook of Pride and Prejudice, by Jane Austen\n\
\n\
This eBook is for the use of anyone anywhere at no cost.\n\
\n\
Title: Pride and Prejudice\n\
\n\
Chapter 1\n\
\n\
It is a truth universally acknowledged, that a single man in possession\n\
of a good fortune, must be in want of a wife.\n\
\n\
\u{201C}My dear Mr. Bennet,\u{201D} said his lady to him one day, \u{201C}have you\n\
heard that Netherfield Park is let at last?\u{201D}\n\
\n\
Mr. Bennet replied that he had not.\n\
\n\
Chapter 2\n\
\n\
Mr. Bennet was among the earliest of those who waited on Mr. Bingley.\n\
The ball was _very_ fine. Mrs. Bennet was delighted--she could not\n\
stop talking of it.\n\
\n\
Chapter 3\n\
\n\
Not all that Mrs. Bennet, however, could ask on the subject was\n\
sufficient to draw from her husband any satisfactory description of\n\
Mr. Bingley. THE END of the evening came at last. Elizabeth laughed.\n\
\n\
End of the Project Gutenberg EBook of Pride and Prejudice, by Jane Austen\n\
\n\
*** This file should be named 1342-0.txt or 1342-0.zip ***\n";

/// Common-word list, most common first
pub const SAMPLE_STOPWORDS: &str = "the\nof\nto\nand\na\nin\nis\nit\nyou\nthat\nhe\nwas\nfor\non\nare\nwith\nas\nI\nhis\nthey\n";

/// Quote that only occurs in chapter 3
pub const CHAPTER_3_QUOTE: &str = "any satisfactory description of Mr. Bingley.";
