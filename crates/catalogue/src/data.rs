//! The catalogue content.

use crate::models::{Category, Element, ReferenceTarget};

/// Every documented element, grouped by category in display order.
pub static CATALOGUE: &[Category] = &[
    Category {
        name: "Document Structure",
        elements: &[
            Element::new(
                "<html>",
                "Defines the root of an HTML document",
                "<html lang=\"en\">...</html>",
            )
            .without_preview(),
            Element::new(
                "<head>",
                "Contains metadata/information for the document",
                "<head>\n  <title>Page Title</title>\n</head>",
            )
            .without_preview(),
            Element::new(
                "<body>",
                "Defines the document's body",
                "<body>\n  <h1>Hello, World!</h1>\n</body>",
            ),
            Element::new(
                "<!DOCTYPE>",
                "Defines the document type",
                "<!DOCTYPE html>",
            )
            .without_preview()
            .with_reference(ReferenceTarget::None),
            Element::new(
                "<title>",
                "Defines a title for the document",
                "<title>My Web Page</title>",
            )
            .without_preview(),
            Element::new(
                "<div>",
                "Defines a block-level section in a document",
                "<div class=\"container\">...</div>",
            ),
            Element::new(
                "<span>",
                "Defines an inline section in a document",
                "<p>This is \n  <span style=\"color: red;\">important</span> text.\n</p>",
            ),
        ],
    },
    Category {
        name: "Metadata",
        elements: &[
            Element::new(
                "<base>",
                "Specifies the base URL/target for all relative URLs in a document",
                "<base href=\"https://www.example.com/\">\n<a href=\"/404\">Click here</a>",
            ),
            Element::new(
                "<link>",
                "Defines the relationship between a document and an external resource",
                "<link rel=\"stylesheet\" href=\"styles.css\">",
            )
            .without_preview(),
            Element::new(
                "<meta>",
                "Defines metadata about an HTML document",
                "<meta charset=\"UTF-8\">",
            )
            .without_preview(),
            Element::new(
                "<style>",
                "Defines style information for a document",
                "<style>body { background-color: #000000; }</style>",
            )
            .without_preview(),
        ],
    },
    Category {
        name: "Text Content",
        elements: &[
            Element::new("<p>", "Defines a paragraph", "<p>This is a paragraph.</p>"),
            Element::new(
                "<h1> through <h6>",
                "Defines HTML headings",
                "<h1>Main Heading</h1>\n<h3>Subheading</h3>",
            )
            .with_reference(ReferenceTarget::Override("Heading_Elements")),
            Element::new("<br>", "Defines a single line break", "Line 1<br>Line 2"),
            Element::new(
                "<hr>",
                "Defines a thematic change in the content",
                "<p>Section 1</p>\n<hr>\n<p>Section 2</p>",
            ),
        ],
    },
    Category {
        name: "Text Formatting",
        elements: &[
            Element::new(
                "<strong>",
                "Defines important text",
                "<strong>This text is important!</strong>",
            ),
            Element::new(
                "<em>",
                "Defines emphasized text",
                "<em>This text is emphasized</em>",
            ),
            Element::new(
                "<i>",
                "Defines a part of text in an alternate voice or mood",
                "<i>This text is italic</i>",
            ),
            Element::new("<b>", "Defines bold text", "<b>This text is bold</b>"),
            Element::new(
                "<u>",
                "Defines underlined text",
                "<u>This text is underlined</u>",
            ),
            Element::new(
                "<small>",
                "Defines smaller text",
                "<small>This is smaller text</small>",
            ),
            Element::new("<sub>", "Defines subscripted text", "H<sub>2</sub>O"),
            Element::new("<sup>", "Defines superscripted text", "X<sup>2</sup>"),
            Element::new(
                "<mark>",
                "Defines marked/highlighted text",
                "<mark>Highlighted text</mark>",
            ),
        ],
    },
    Category {
        name: "Lists",
        elements: &[
            Element::new(
                "<ul>",
                "Defines an unordered list",
                "<ul>\n  <li>Item 1</li>\n  <li>Item 2</li>\n</ul>",
            ),
            Element::new(
                "<ol>",
                "Defines an ordered list",
                "<ol>\n  <li>First item</li>\n  <li>Second item</li>\n</ol>",
            ),
            Element::new("<li>", "Defines a list item", "<li>List item</li>"),
            Element::new(
                "<dl>",
                "Defines a description list",
                "<dl>\n  <dt>Term</dt>\n  <dd>Description</dd>\n</dl>",
            ),
            Element::new(
                "<dt>",
                "Defines a term/name in a description list",
                "<dt>HTML</dt>",
            ),
            Element::new(
                "<dd>",
                "Defines a description of a term/name in a description list",
                "<dd>HyperText Markup Language</dd>",
            ),
        ],
    },
    Category {
        name: "Links",
        elements: &[
            Element::new(
                "<a>",
                "Defines a hyperlink",
                "<a href=\"https://www.example.com\">Visit Example.com</a>",
            ),
            Element::new(
                "<nav>",
                "Defines navigation links",
                "<nav>\n  <a href=\"#home\">Home</a>\n  <a href=\"#about\">About</a>\n</nav>",
            ),
        ],
    },
    Category {
        name: "Images and Multimedia",
        elements: &[
            Element::new(
                "<img>",
                "Defines an image",
                "<img src=\"https://picsum.photos/200\">",
            ),
            Element::new(
                "<audio>",
                "Defines sound content",
                "<audio controls>\n  <source src=\"audio.mp3\" type=\"audio/mpeg\">\n</audio>",
            ),
            Element::new(
                "<video>",
                "Defines a video or movie",
                "<video width=\"320\" height=\"240\" controls>\n  <source src=\"movie.mp4\" type=\"video/mp4\">\n</video>",
            ),
            Element::new(
                "<source>",
                "Defines multiple media resources for media elements",
                "<source src=\"movie.mp4\" type=\"video/mp4\">",
            ),
            Element::new(
                "<track>",
                "Defines text tracks for media elements",
                "<track src=\"subtitles_en.vtt\" kind=\"subtitles\" srclang=\"en\" label=\"English\">",
            )
            .without_preview(),
            Element::new(
                "<figure>",
                "Specifies self-contained content",
                "<figure>\n  <img src=\"https://picsum.photos/100\" alt=\"Description\">\n  <figcaption>Figure caption</figcaption>\n</figure>",
            ),
            Element::new(
                "<figcaption>",
                "Defines a caption for a <figure> element",
                "<figcaption>This is a caption for the figure</figcaption>",
            ),
        ],
    },
    Category {
        name: "Table Content",
        elements: &[
            Element::new(
                "<table>",
                "Defines a table",
                "<table>\n  <tr>\n    <th>Header 1</th>\n    <th>Header 2</th>\n  </tr>\n  <tr>\n    <td>Row 1, Cell 1</td>\n    <td>Row 1, Cell 2</td>\n  </tr>\n</table>",
            ),
            Element::new(
                "<tr>",
                "Defines a row in a table",
                "<tr>\n  <td>Row content</td>\n</tr>",
            ),
            Element::new(
                "<th>",
                "Defines a header cell in a table",
                "<th>Header content</th>",
            ),
            Element::new("<td>", "Defines a cell in a table", "<td>Cell content</td>"),
            Element::new(
                "<caption>",
                "Defines a table caption",
                "<caption>Table Caption</caption>",
            ),
            Element::new(
                "<thead>",
                "Groups the header content in a table",
                "<thead>\n  <tr>\n    <th>Header 1</th>\n    <th>Header 2</th>\n  </tr>\n</thead>",
            ),
            Element::new(
                "<tbody>",
                "Groups the body content in a table",
                "<tbody>\n  <tr>\n    <td>Row 1, Cell 1</td>\n    <td>Row 1, Cell 2</td>\n  </tr>\n</tbody>",
            ),
            Element::new(
                "<tfoot>",
                "Groups the footer content in a table",
                "<tfoot>\n  <tr>\n    <td>Footer 1</td>\n    <td>Footer 2</td>\n  </tr>\n</tfoot>",
            ),
            Element::new(
                "<col>",
                "Specifies column properties for each column within a <colgroup> element",
                "<colgroup>\n  <col style=\"background-color: yellow\">\n  <col style=\"background-color: red\">\n</colgroup>",
            ),
            Element::new(
                "<colgroup>",
                "Specifies a group of one or more columns in a table for formatting",
                "<colgroup>\n  <col span=\"2\" style=\"background-color: yellow\">\n</colgroup>",
            ),
        ],
    },
    Category {
        name: "Forms and Input",
        elements: &[
            Element::new(
                "<form>",
                "Defines an HTML form for user input",
                "<form action=\"/submit\" method=\"post\">\n  <!-- Form elements go here -->\n</form>",
            ),
            Element::new(
                "<input>",
                "Defines an input control",
                "<input type=\"text\" name=\"username\" placeholder=\"Enter username\">",
            ),
            Element::new(
                "<textarea>",
                "Defines a multiline input control",
                "<textarea name=\"message\" rows=\"4\" cols=\"50\">Enter your message here</textarea>",
            ),
            Element::new(
                "<button>",
                "Defines a clickable button",
                "<button type=\"submit\">Submit</button>",
            ),
            Element::new(
                "<select>",
                "Defines a drop-down list",
                "<select name=\"cars\">\n  <option value=\"volvo\">Volvo</option>\n  <option value=\"saab\">Saab</option>\n</select>",
            ),
            Element::new(
                "<option>",
                "Defines an option in a drop-down list",
                "<option value=\"volvo\">Volvo</option>",
            ),
            Element::new(
                "<optgroup>",
                "Defines a group of related options in a drop-down list",
                "<optgroup label=\"Swedish Cars\">\n  <option value=\"volvo\">Volvo</option>\n  <option value=\"saab\">Saab</option>\n</optgroup>",
            ),
            Element::new(
                "<label>",
                "Defines a label for an <input> element",
                "<label for=\"username\">Username:</label>\n<input type=\"text\" id=\"username\" name=\"username\">",
            ),
            Element::new(
                "<fieldset>",
                "Groups related elements in a form",
                "<fieldset>\n  <legend>Personal Information</legend>\n  <!-- Form elements go here -->\n</fieldset>",
            ),
            Element::new(
                "<legend>",
                "Defines a caption for a <fieldset> element",
                "<legend>Personal Information</legend>",
            ),
            Element::new(
                "<datalist>",
                "Specifies a list of pre-defined options for input controls",
                "<input list=\"browsers\">\n<datalist id=\"browsers\">\n  <option value=\"Chrome\">\n  <option value=\"Firefox\">\n</datalist>",
            ),
            Element::new(
                "<output>",
                "Defines the result of a calculation",
                "<form oninput=\"result.value=parseInt(a.value)+parseInt(b.value)\">\n  <input type=\"range\" name=\"a\" value=\"50\"> +\n  <input type=\"number\" name=\"b\" value=\"50\"> =\n  <output name=\"result\"></output>\n</form>",
            ),
        ],
    },
    Category {
        name: "Scripting",
        elements: &[
            Element::new(
                "<script>",
                "Defines a client-side script",
                "<script>\n  console.log(\"Hello, World!\");\n</script>",
            )
            .without_preview(),
            Element::new(
                "<noscript>",
                "Defines an alternate content for users that do not support client-side scripts",
                "<noscript>Your browser does not support JavaScript!</noscript>",
            )
            .without_preview(),
            Element::new(
                "<canvas>",
                "Used to draw graphics, on the fly, via scripting (usually JavaScript)",
                "<canvas id=\"myCanvas\" width=\"200\" height=\"100\"></canvas>",
            )
            .without_preview(),
        ],
    },
    Category {
        name: "Semantic and Structure",
        elements: &[
            Element::new(
                "<article>",
                "Defines an article",
                "<article>\n  <h2>Article Title</h2>\n  <p>Article content...</p>\n</article>",
            ),
            Element::new(
                "<aside>",
                "Defines content aside from the page content",
                "<aside>\n  <h4>Related links</h4>\n  <ul>\n    <li><a href=\"#\">Link 1</a></li>\n    <li><a href=\"#\">Link 2</a></li>\n  </ul>\n</aside>",
            ),
            Element::new(
                "<details>",
                "Defines additional details that the user can view or hide",
                "<details>\n  <summary>Click to view more</summary>\n  <p>Additional information...</p>\n</details>",
            ),
            Element::new(
                "<summary>",
                "Defines a visible heading for a <details> element",
                "<summary>Click to view more</summary>",
            ),
            Element::new(
                "<footer>",
                "Defines a footer for a document or section",
                "<footer>\n  <p>&copy; 2023 My Website. All rights reserved.</p>\n</footer>",
            ),
            Element::new(
                "<header>",
                "Defines a header for a document or section",
                "<header>\n  <h1>Welcome to My Website</h1>\n  <nav><!-- Navigation menu --></nav>\n</header>",
            ),
            Element::new(
                "<main>",
                "Specifies the main content of a document",
                "<main>\n  <h1>Main Content</h1>\n  <p>This is the main content of the page.</p>\n</main>",
            ),
            Element::new(
                "<section>",
                "Defines a section in a document",
                "<section>\n  <h2>Section Title</h2>\n  <p>Section content...</p>\n</section>",
            ),
            Element::new(
                "<time>",
                "Defines a date/time",
                "<time datetime=\"2023-07-21 20:00\">\n  July 21, 2023 at 8:00 PM\n</time>",
            ),
        ],
    },
    Category {
        name: "Embedded Content",
        elements: &[
            Element::new(
                "<embed>",
                "Defines a container for an external application",
                "<embed src=\"game.swf\" width=\"300\" height=\"300\">",
            ),
            Element::new(
                "<iframe>",
                "Defines an inline frame",
                "<iframe src=\"https://www.example.com\" width=\"200\">\n</iframe>",
            ),
            Element::new(
                "<object>",
                "Defines an embedded object",
                "<object data=\"file.pdf\" type=\"application/pdf\" width=\"300\" height=\"200\"></object>",
            )
            .without_preview(),
            Element::new(
                "<param>",
                "Defines a parameter for an object",
                "<object data=\"movie.swf\">\n  <param name=\"autoplay\" value=\"true\">\n</object>",
            ),
        ],
    },
];
